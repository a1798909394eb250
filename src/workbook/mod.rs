//! ブック読み込み（calamine）
//!
//! xlsx/xlsm/xls/ods を拡張子から自動判別して開き、
//! シートを [`SheetGrid`]（A1起点の絶対位置）に変換する。

use crate::error::{Result, WorkloadError};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use sci_workload_common::{CellValue, SheetGrid};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// 表形式データの読み出し元
pub trait SheetSource {
    /// シート名一覧（ブック内の順序）
    fn sheet_names(&self) -> Vec<String>;

    /// シートを読み込む
    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid>;

    fn has_sheet(&self, name: &str) -> bool {
        self.sheet_names().iter().any(|s| s == name)
    }
}

/// calamineで開いたブック
pub struct Workbook {
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WorkloadError::WorkbookNotFound(path.display().to_string()));
        }

        let sheets = open_workbook_auto(path)
            .map_err(|e| WorkloadError::WorkbookOpen(format!("{}: {}", path.display(), e)))?;

        Ok(Self { sheets })
    }
}

impl SheetSource for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
        if !self.has_sheet(name) {
            return Err(WorkloadError::SheetNotFound(name.to_string()));
        }

        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| WorkloadError::SheetRead(format!("{}: {}", name, e)))?;

        let grid = range_to_grid(name, &range);
        debug!(
            sheet = name,
            rows = grid.row_count(),
            cols = grid.column_count(),
            "シート読み込み"
        );
        Ok(grid)
    }
}

/// 使用範囲をA1起点のグリッドに展開
///
/// calamineのRangeは使用範囲の左上が起点なので、列番号がずれないよう絶対位置で詰め直す。
fn range_to_grid(name: &str, range: &Range<Data>) -> SheetGrid {
    let Some((end_row, end_col)) = range.end() else {
        return SheetGrid::new(name, Vec::new());
    };

    let rows = (0..=end_row)
        .map(|r| {
            (0..=end_col)
                .map(|c| range.get_value((r, c)).map(convert_cell).unwrap_or_default())
                .collect()
        })
        .collect();

    SheetGrid::new(name, rows)
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(convert_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(0.5)), CellValue::Number(0.5));
        assert_eq!(
            convert_cell(&Data::String("In Progress".into())),
            CellValue::Text("In Progress".into())
        );
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
    }

    #[test]
    fn test_range_offset_is_absolute() {
        // C2:D3 の範囲 → A1起点に展開
        let mut range: Range<Data> = Range::new((1, 2), (2, 3));
        range.set_value((1, 2), Data::String("x".into()));
        range.set_value((2, 3), Data::Float(2.0));

        let grid = range_to_grid("Test", &range);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(1, 2), &CellValue::Text("x".into()));
        assert_eq!(grid.cell(2, 3), &CellValue::Number(2.0));
        assert_eq!(grid.cell(0, 0), &CellValue::Empty);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        let grid = range_to_grid("Empty", &range);
        assert_eq!(grid.row_count(), 0);
    }

    #[test]
    fn test_open_missing_workbook() {
        let result = Workbook::open(Path::new("/nonexistent/book.xlsx"));
        assert!(matches!(result, Err(WorkloadError::WorkbookNotFound(_))));
    }
}
