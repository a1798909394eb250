//! ダッシュボードタブの読み取り
//!
//! 列構成（0始まり）:
//! - 0: 氏名 / 1: 課題数 / 2: 進行中 / 3: 進行中時間 / 4: 稼働可能時間
//! - 5: 稼働率（1.0 = 100%） / 6: 稼働状況
//! - 7-14: 業務種別ごとの（件数, 時間）

use crate::cell::{CellValue, SheetGrid};
use serde::{Deserialize, Serialize};

/// メンバー行として読む最終行（0始まり、シートの20行目）
pub const LAST_MEMBER_ROW: usize = 19;

/// 見出し行の走査範囲
pub const SECTION_SCAN_ROWS: usize = 200;

/// 見出しとみなすキーワード（大文字で比較）
pub const SECTION_KEYWORDS: [&str; 7] = [
    "NAME",
    "TOTAL",
    "ASSIGNMENT",
    "WORKLOAD",
    "CAPACITY",
    "HOURS",
    "SUMMARY",
];

/// 稼働可能時間が空欄のときの既定値
pub const DEFAULT_AVAILABLE_HOURS: f64 = 40.0;

/// 業務種別列（ラベル, 件数列）。時間列は件数列の次
pub const WORK_TYPE_COLUMNS: [(&str, usize); 4] = [
    ("Epic Gold", 7),
    ("Governance", 9),
    ("Sys Init", 11),
    ("Sys Proj", 13),
];

/// 稼働率の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityBand {
    /// 100%超
    Over,
    /// 80〜100%
    Near,
    /// 80%未満
    Under,
}

impl CapacityBand {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization > 1.0 {
            CapacityBand::Over
        } else if utilization >= 0.8 {
            CapacityBand::Near
        } else {
            CapacityBand::Under
        }
    }
}

/// 業務種別ごとの（件数, 時間）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkTypeLoad {
    pub count: f64,
    pub hours: f64,
}

/// ダッシュボードのメンバー行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMember {
    pub name: String,
    pub total: f64,
    pub active: f64,
    pub active_hours: f64,
    pub available_hours: f64,
    /// 稼働率（空欄・0はNone）
    pub utilization: Option<f64>,
    pub capacity_status: String,
    /// WORK_TYPE_COLUMNS と同順。件数・時間のどちらかが空ならNone
    pub work_types: Vec<Option<WorkTypeLoad>>,
}

impl DashboardMember {
    /// 行から生成（氏名が空ならNone）
    pub fn from_cells(cells: &[CellValue]) -> Option<Self> {
        let cell = |col: usize| cells.get(col).cloned().unwrap_or_default();
        let number = |col: usize| cell(col).as_nonzero_f64();

        let name = cell(0).as_text()?;

        let work_types = WORK_TYPE_COLUMNS
            .iter()
            .map(|(_, col)| match (number(*col), number(col + 1)) {
                (Some(count), Some(hours)) => Some(WorkTypeLoad { count, hours }),
                _ => None,
            })
            .collect();

        Some(Self {
            name,
            total: number(1).unwrap_or(0.0),
            active: number(2).unwrap_or(0.0),
            active_hours: number(3).unwrap_or(0.0),
            available_hours: number(4).unwrap_or(DEFAULT_AVAILABLE_HOURS),
            utilization: number(5),
            capacity_status: cell(6).as_text().unwrap_or_default(),
            work_types,
        })
    }

    pub fn band(&self) -> Option<CapacityBand> {
        self.utilization.map(CapacityBand::from_utilization)
    }
}

/// メンバー行を読み出す（2〜20行目で氏名があるもの）
pub fn dashboard_members(grid: &SheetGrid) -> Vec<DashboardMember> {
    (1..=LAST_MEMBER_ROW)
        .filter_map(|row| DashboardMember::from_cells(grid.row(row)))
        .collect()
}

/// ヘッダーラベル（1始まりの列番号付き、空欄は除く）
pub fn header_labels(grid: &SheetGrid, max_cols: usize) -> Vec<(usize, String)> {
    grid.header()
        .iter()
        .take(max_cols)
        .enumerate()
        .filter_map(|(i, c)| c.as_text().map(|t| (i + 1, t)))
        .collect()
}

/// ダッシュボード全体の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_assignments: f64,
    pub total_active: f64,
    pub total_active_hours: f64,
    /// 稼働率の平均（空欄は0扱い、メンバー0人なら0）
    pub avg_utilization: f64,
    pub over_capacity: Vec<String>,
    pub near_capacity: Vec<String>,
    pub under_capacity: Vec<String>,
}

impl DashboardSummary {
    pub fn from_members(members: &[DashboardMember]) -> Self {
        let mut summary = Self::default();
        let mut utilization_sum = 0.0;

        for m in members {
            summary.total_assignments += m.total;
            summary.total_active += m.active;
            summary.total_active_hours += m.active_hours;
            utilization_sum += m.utilization.unwrap_or(0.0);

            match m.band() {
                Some(CapacityBand::Over) => summary.over_capacity.push(m.name.clone()),
                Some(CapacityBand::Near) => summary.near_capacity.push(m.name.clone()),
                Some(CapacityBand::Under) => summary.under_capacity.push(m.name.clone()),
                None => {}
            }
        }

        if !members.is_empty() {
            summary.avg_utilization = utilization_sum / members.len() as f64;
        }

        summary
    }
}

/// 先頭セルにキーワードを含む行（0始まりの行番号）
pub fn key_section_rows(grid: &SheetGrid) -> Vec<usize> {
    (0..grid.row_count().min(SECTION_SCAN_ROWS))
        .filter(|&row| {
            grid.cell(row, 0)
                .as_text()
                .map(|t| {
                    let upper = t.trim().to_uppercase();
                    SECTION_KEYWORDS.iter().any(|k| upper.contains(k))
                })
                .unwrap_or(false)
        })
        .collect()
}
