//! データ品質レポート（テキスト）

use super::{rule, HEAVY_WIDTH_NARROW};
use sci_workload_common::{worst_quality, PersonSummary, QualityReport};
use std::fmt::Write;

/// 担当者ごとのブロック
pub fn render_person(p: &PersonSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}:", p.name);
    let _ = writeln!(out, "  Total: {:3} assignments", p.total_assignments);
    let _ = writeln!(out, "  Active: {:3} assignments", p.active_assignments);
    let _ = writeln!(
        out,
        "  Has Effort: {:3} ({:.1}%)",
        p.has_work_effort,
        p.completion_rate * 100.0
    );
    let _ = writeln!(out, "  Missing: {:3}", p.missing_work_effort);
    let _ = writeln!(out, "  Est. Hours/Week: {:.1}h", p.estimated_hours);

    if !p.work_types.is_empty() {
        let _ = writeln!(out, "  Work Types:");
        for (work_type, tally) in p.work_types_by_hours() {
            if tally.count > 0 {
                let _ = writeln!(
                    out,
                    "    {:<25}: {:2} items, {:5.1}h, {} missing",
                    work_type, tally.count, tally.hours, tally.missing
                );
            }
        }
    }

    out
}

/// チーム集計と入力率の低い担当者
pub fn render_team(report: &QualityReport, worst: usize) -> String {
    let mut out = String::new();
    let team = &report.team_summary;

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_NARROW));
    let _ = writeln!(out, "TEAM SUMMARY:");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_NARROW));
    let _ = writeln!(out, "Total Assignments: {}", team.total_assignments);
    let _ = writeln!(
        out,
        "Has Work Effort: {} ({:.1}%)",
        team.has_effort,
        team.has_effort_percent()
    );
    let _ = writeln!(
        out,
        "Missing Work Effort: {} ({:.1}%)",
        team.missing_effort,
        team.missing_effort_percent()
    );
    let _ = writeln!(out, "Total Active Hours/Week: {:.1}h", team.total_active_hours);
    let _ = writeln!(
        out,
        "Average Completion Rate: {:.1}%",
        team.avg_completion_rate * 100.0
    );

    let _ = writeln!(out, "\nMEMBERS NEEDING DATA UPDATES (worst data quality):");
    for p in worst_quality(&report.team_members, worst) {
        let _ = writeln!(
            out,
            "  {:<12}: {:5.1}% complete ({} missing)",
            p.name,
            p.completion_rate * 100.0,
            p.missing_work_effort
        );
    }

    out
}

/// レポート全体
pub fn render_quality(report: &QualityReport, missing_sheets: &[String], worst: usize) -> String {
    let mut out = String::new();

    for name in missing_sheets {
        let _ = writeln!(out, "  Sheet not found: {}", name);
    }
    for person in &report.team_members {
        out.push_str(&render_person(person));
    }
    out.push_str(&render_team(report, worst));

    out
}
