//! ダッシュボードタブの構造表示

use super::{rule, HEAVY_WIDTH, HEAVY_WIDTH_FULL, HEAVY_WIDTH_WIDE};
use sci_workload_common::dashboard::{
    dashboard_members, header_labels, key_section_rows, WorkTypeLoad, WORK_TYPE_COLUMNS,
};
use sci_workload_common::{DashboardMember, DashboardSummary, SheetGrid};
use std::fmt::Write;

/// 見出し行として表示するセル数
const SECTION_ROW_CELLS: usize = 15;

/// 稼働状況欄の最大文字数
const CAPACITY_STATUS_MAX_CHARS: usize = 30;

fn work_type_cell(load: &Option<WorkTypeLoad>) -> String {
    match load {
        Some(l) => format!("{:.0} cnt, {:.1}h", l.count, l.hours),
        None => "0 cnt, 0h".to_string(),
    }
}

fn member_line(m: &DashboardMember) -> String {
    let utilization = match m.utilization {
        Some(u) => format!("{:.1}%", u * 100.0),
        None => "0%".to_string(),
    };
    let status: String = m.capacity_status.chars().take(CAPACITY_STATUS_MAX_CHARS).collect();

    format!(
        "{:<10} {:>6.0} {:>8.0} {:>12.2} {:>10.0} {:>12} {:<30}",
        m.name, m.total, m.active, m.active_hours, m.available_hours, utilization, status
    )
}

pub fn render_dashboard(grid: &SheetGrid, show_sections: bool) -> String {
    let mut out = String::new();
    let members = dashboard_members(grid);
    let summary = DashboardSummary::from_members(&members);

    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "DASHBOARD TAB - COMPLETE STRUCTURE");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));

    let _ = writeln!(out, "\nCOLUMN HEADERS:");
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH_FULL));
    for (col, label) in header_labels(grid, usize::MAX) {
        let _ = writeln!(out, "  Col {:2}: {}", col, label);
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "TEAM MEMBER DATA:");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));

    let headers: Vec<String> = (0..7).map(|c| grid.cell(0, c).to_string()).collect();
    let _ = writeln!(
        out,
        "\n{:<10} {:<6} {:<8} {:<12} {:<10} {:<12} {:<30}",
        headers[0], headers[1], headers[2], headers[3], headers[4], headers[5], headers[6]
    );
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH_FULL));
    for m in &members {
        let _ = writeln!(out, "{}", member_line(m));
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "WORK TYPE BREAKDOWN (by hours):");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));
    let mut heading = format!("\n{:<10}", "Name");
    for (label, _) in WORK_TYPE_COLUMNS {
        let _ = write!(heading, " {:<15}", label);
    }
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH));
    for m in &members {
        let mut line = format!("{:<10}", m.name);
        for load in &m.work_types {
            let _ = write!(line, " {:<15}", work_type_cell(load));
        }
        let _ = writeln!(out, "{}", line);
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "TEAM SUMMARY:");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "Total Assignments: {:.0}", summary.total_assignments);
    let _ = writeln!(out, "Total Active: {:.0}", summary.total_active);
    let _ = writeln!(out, "Total Active Hours/Week: {:.2}", summary.total_active_hours);
    let _ = writeln!(
        out,
        "Average Capacity Utilization: {:.1}%",
        summary.avg_utilization * 100.0
    );

    let _ = writeln!(
        out,
        "\nOver Capacity (>100%): {} - {}",
        summary.over_capacity.len(),
        summary.over_capacity.join(", ")
    );
    let _ = writeln!(
        out,
        "Near Capacity (80-100%): {} - {}",
        summary.near_capacity.len(),
        summary.near_capacity.join(", ")
    );
    let _ = writeln!(
        out,
        "Under Capacity (<80%): {} - {}",
        summary.under_capacity.len(),
        summary.under_capacity.join(", ")
    );

    if show_sections {
        let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_WIDE));
        let _ = writeln!(out, "LOOKING FOR KEY SECTIONS...");
        let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_WIDE));
        for row in key_section_rows(grid) {
            let cells: Vec<String> = (0..SECTION_ROW_CELLS)
                .map(|c| grid.cell(row, c).to_string())
                .collect();
            let _ = writeln!(out, "\nRow {}: {}", row + 1, cells.join(" | "));
        }
    }

    out
}
