//! シートの生データ表示

use super::{rule, truncate_with_ellipsis, HEAVY_WIDTH, HEAVY_WIDTH_FULL};
use sci_workload_common::dashboard::header_labels;
use sci_workload_common::SheetGrid;
use std::fmt::Write;

/// ヘッダー表示の最大列数
const HEADER_MAX_COLS: usize = 15;

/// セル値を表示用に並べる（空セルは空文字）
fn row_cells(grid: &SheetGrid, row: usize, cols: usize, width: Option<usize>) -> String {
    (0..cols)
        .map(|c| {
            let text = grid.cell(row, c).to_string();
            match width {
                Some(w) => truncate_with_ellipsis(&text, w),
                None => text,
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// シート名一覧
pub fn render_sheet_list(names: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH));
    let _ = writeln!(out, "SHEET NAMES:");
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH));
    for name in names {
        let _ = writeln!(out, "  - {}", name);
    }
    out
}

/// シート先頭のプレビュー
pub fn render_sheet_preview(grid: &SheetGrid, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n\n{}", rule('=', HEAVY_WIDTH));
    let _ = writeln!(out, "SHEET: {}", grid.name);
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH));

    let shown_cols = cols.min(grid.column_count());
    for row in 0..rows.min(grid.row_count()) {
        let _ = writeln!(out, "Row {:2}: {}", row + 1, row_cells(grid, row, shown_cols, None));
    }

    let _ = writeln!(
        out,
        "\n(Sheet has {} rows and {} columns)",
        grid.row_count(),
        grid.column_count()
    );
    out
}

/// 1シートの構造表示（ヘッダーと値のある先頭行）
pub fn render_inspect(grid: &SheetGrid, rows: usize, cols: usize, width: usize) -> String {
    let mut out = String::new();
    let title = grid.name.to_uppercase();

    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "{} TAB ANALYSIS", title);
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(
        out,
        "Sheet has {} rows and {} columns\n",
        grid.row_count(),
        grid.column_count()
    );

    let _ = writeln!(out, "COLUMN HEADERS:");
    let _ = writeln!(out, "{}", rule('-', HEAVY_WIDTH_FULL));
    for (col, label) in header_labels(grid, HEADER_MAX_COLS) {
        let _ = writeln!(out, "  Col {:2}: {}", col, label);
    }

    let _ = writeln!(out, "\n{}", rule('=', HEAVY_WIDTH_FULL));
    let _ = writeln!(out, "{} DATA (First {} rows):", title, rows);
    let _ = writeln!(out, "{}", rule('=', HEAVY_WIDTH_FULL));

    // ヘッダー行を含めて rows+1 行を走査
    let shown_cols = cols.min(grid.column_count());
    for row in 0..=rows {
        if row >= grid.row_count() {
            break;
        }
        if grid.row_has_data(row, cols) {
            let cells = row_cells(grid, row, shown_cols, Some(width));
            let _ = writeln!(out, "Row {:3}: {}", row + 1, cells);
        }
    }

    out
}
