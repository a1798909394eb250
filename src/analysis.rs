//! 名簿の個人シートを読み込んで集計する
//!
//! シート読み込みは逐次（ブックは1つの可変リーダー）、
//! 読み込み済み行の集計は担当者ごとに独立しているのでrayonで並列化する。
//! 結果は名簿順に並ぶ。

use crate::error::Result;
use crate::workbook::SheetSource;
use rayon::prelude::*;
use sci_workload_common::assignments::AssignmentCounts;
use sci_workload_common::{
    assignment_rows, summarize_person, summarize_team, AssignmentRow, PersonSummary, QualityReport,
};
use tracing::{debug, info, warn};

/// 名簿のシート読み込み結果
#[derive(Debug, Default)]
pub struct RosterSheets {
    /// (担当者名, 課題行)
    pub people: Vec<(String, Vec<AssignmentRow>)>,
    /// シートが見つからなかった担当者
    pub missing: Vec<String>,
}

/// 名簿にある個人シートを読み込む
pub fn load_roster<S: SheetSource>(source: &mut S, members: &[String]) -> Result<RosterSheets> {
    let mut roster = RosterSheets::default();

    for member in members {
        if !source.has_sheet(member) {
            warn!(sheet = member.as_str(), "シートなし");
            roster.missing.push(member.clone());
            continue;
        }

        let grid = source.read_sheet(member)?;
        let rows = assignment_rows(&grid);
        debug!(
            sheet = member.as_str(),
            rows = rows.len(),
            skipped = rows.iter().filter(|r| !r.is_assignment()).count(),
            "課題行抽出"
        );
        roster.people.push((member.clone(), rows));
    }

    info!(
        loaded = roster.people.len(),
        missing = roster.missing.len(),
        "名簿読み込み完了"
    );
    Ok(roster)
}

/// データ品質レポートを作成
pub fn quality_report(roster: &RosterSheets) -> QualityReport {
    let team_members: Vec<PersonSummary> = roster
        .people
        .par_iter()
        .map(|(name, rows)| summarize_person(name, rows))
        .collect();

    let team_summary = summarize_team(&team_members);

    QualityReport {
        team_members,
        team_summary,
    }
}

/// 担当者ごとの件数集計
pub fn assignment_counts(roster: &RosterSheets) -> Vec<AssignmentCounts> {
    roster
        .people
        .par_iter()
        .map(|(name, rows)| AssignmentCounts::from_rows(name, rows))
        .collect()
}
