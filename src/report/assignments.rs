//! 課題件数レポート（ステータス別・業務種別）

use super::{rule, HEAVY_WIDTH_WIDE};
use sci_workload_common::assignments::{
    top_by_total, totals, work_type_distribution, AssignmentCounts,
};
use std::fmt::Write;

/// 業務種別欄で省略せずに出す文字数（超えたら "..." を付ける）
const WORK_TYPE_KEEP_CHARS: usize = 47;

fn clip_work_types(s: &str) -> String {
    if s.chars().count() <= WORK_TYPE_KEEP_CHARS {
        return s.to_string();
    }
    let mut out: String = s.chars().take(WORK_TYPE_KEEP_CHARS).collect();
    out.push_str("...");
    out
}

pub fn render_assignments(
    people: &[AssignmentCounts],
    missing_sheets: &[String],
    top: usize,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_WIDE));
    let _ = writeln!(out, "TEAM MEMBER ASSIGNMENT ANALYSIS");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_WIDE));
    let _ = writeln!(
        out,
        "\n{:<12} {:>6} {:>6} {:>8} {:>8} {:<50}",
        "Name", "Total", "Active", "Complete", "On Hold", "Work Types"
    );
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH_WIDE));

    for p in people {
        let work_types = p
            .work_types
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        let work_types = clip_work_types(&work_types);

        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>6} {:>8} {:>8} {:<50}",
            p.name, p.total, p.active, p.complete, p.on_hold, work_types
        );
    }

    let t = totals(people);
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH_WIDE));
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>6} {:>8} {:>8}",
        "TOTAL", t.total, t.active, t.complete, t.on_hold
    );

    for name in missing_sheets {
        let _ = writeln!(out, "  Sheet not found: {}", name);
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_WIDE));
    let _ = writeln!(out, "TOP {} TEAM MEMBERS BY TOTAL ASSIGNMENTS", top);
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_WIDE));
    for (idx, p) in top_by_total(people, top).iter().enumerate() {
        let _ = writeln!(
            out,
            "{:2}. {:<12} - {:>3} assignments ({:>2} active, {:>2} complete)",
            idx + 1,
            p.name,
            p.total,
            p.active,
            p.complete
        );
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_WIDE));
    let _ = writeln!(out, "WORK TYPE DISTRIBUTION (ALL TEAM MEMBERS)");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_WIDE));
    for (work_type, count) in work_type_distribution(people) {
        let _ = writeln!(out, "  {:<30}: {:>4} assignments", work_type, count);
    }

    out
}
