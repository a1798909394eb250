//! データ品質レポートの型定義
//!
//! JSON出力のキー名はダッシュボード側の取り込みと合わせてsnake_caseのまま。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// 業務種別ごとの集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkTypeTally {
    pub count: usize,
    /// 進行中かつ工数入力済みの課題の時間合計
    pub hours: f64,
    /// 工数未入力の件数
    pub missing: usize,
}

/// 課題ごとの明細
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentDetail {
    /// 課題名（50文字まで）
    pub name: String,
    pub work_effort: String,
    pub work_type: String,
    pub status: String,
    pub has_effort: bool,
    pub is_active: bool,
    pub estimated_hours: Option<f64>,
}

/// 担当者1人分の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub total_assignments: usize,
    pub has_work_effort: usize,
    pub missing_work_effort: usize,
    /// has_work_effort / total_assignments（課題0件なら0）
    pub completion_rate: f64,
    pub active_assignments: usize,
    /// 進行中課題の推定時間（週あたり）
    pub estimated_hours: f64,
    pub work_types: BTreeMap<String, WorkTypeTally>,
    pub assignments_detail: Vec<AssignmentDetail>,
}

impl PersonSummary {
    /// 時間の多い順の業務種別
    pub fn work_types_by_hours(&self) -> Vec<(&str, &WorkTypeTally)> {
        let mut types: Vec<_> = self
            .work_types
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        types.sort_by(|a, b| b.1.hours.total_cmp(&a.1.hours));
        types
    }
}

/// チーム全体の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_assignments: usize,
    pub has_effort: usize,
    pub missing_effort: usize,
    pub total_active_hours: f64,
    pub avg_completion_rate: f64,
}

impl TeamSummary {
    /// 工数入力済みの割合（%）
    pub fn has_effort_percent(&self) -> f64 {
        percent(self.has_effort, self.total_assignments)
    }

    /// 工数未入力の割合（%）
    pub fn missing_effort_percent(&self) -> f64 {
        percent(self.missing_effort, self.total_assignments)
    }
}

/// 分母0なら0
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// データ品質レポート（JSON出力の単位）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub team_members: Vec<PersonSummary>,
    pub team_summary: TeamSummary,
}

impl QualityReport {
    /// インデント付きJSONで書き出し
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
