//! 担当者シートの課題行
//!
//! 個人シートの列構成:
//! - A列: 担当者名
//! - B列: 課題名
//! - E列: 工数サイズ（XS/S/M/L/XL）
//! - G列: 業務種別
//! - I列: ステータス

use crate::cell::{CellValue, SheetGrid};

pub const OWNER_COL: usize = 0;
pub const TITLE_COL: usize = 1;
pub const EFFORT_COL: usize = 4;
pub const WORK_TYPE_COL: usize = 6;
pub const STATUS_COL: usize = 8;

/// 課題行（1回の実行でのみ使う一時データ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentRow {
    pub owner: Option<String>,
    pub title: Option<String>,
    pub effort: Option<String>,
    pub work_type: Option<String>,
    pub status: Option<String>,
}

impl AssignmentRow {
    /// セル列から生成（短い行は不足分を空として扱う）
    pub fn from_cells(cells: &[CellValue]) -> Self {
        let text = |col: usize| cells.get(col).and_then(CellValue::as_text);

        Self {
            owner: text(OWNER_COL),
            title: text(TITLE_COL),
            effort: text(EFFORT_COL),
            work_type: text(WORK_TYPE_COL),
            status: text(STATUS_COL),
        }
    }

    /// 担当者名と課題名の両方があれば課題行
    pub fn is_assignment(&self) -> bool {
        self.owner.is_some() && self.title.is_some()
    }
}

/// シートから課題行を読み出す（ヘッダー行を除く）
pub fn assignment_rows(grid: &SheetGrid) -> Vec<AssignmentRow> {
    grid.data_rows()
        .map(|(_, cells)| AssignmentRow::from_cells(cells))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<CellValue> {
        values
            .iter()
            .map(|v| if v.is_empty() { CellValue::Empty } else { CellValue::from(*v) })
            .collect()
    }

    #[test]
    fn test_from_cells_columns() {
        let row = AssignmentRow::from_cells(&cells(&[
            "Josh", "Epic upgrade", "", "", "M", "", "Epic", "", "In Progress",
        ]));
        assert_eq!(row.owner.as_deref(), Some("Josh"));
        assert_eq!(row.title.as_deref(), Some("Epic upgrade"));
        assert_eq!(row.effort.as_deref(), Some("M"));
        assert_eq!(row.work_type.as_deref(), Some("Epic"));
        assert_eq!(row.status.as_deref(), Some("In Progress"));
        assert!(row.is_assignment());
    }

    #[test]
    fn test_short_row() {
        let row = AssignmentRow::from_cells(&cells(&["Josh", "Task"]));
        assert!(row.is_assignment());
        assert_eq!(row.effort, None);
        assert_eq!(row.status, None);
    }

    #[test]
    fn test_blank_owner_is_not_assignment() {
        let row = AssignmentRow::from_cells(&cells(&["  ", "Task"]));
        assert!(!row.is_assignment());
        let row = AssignmentRow::from_cells(&cells(&["Josh", ""]));
        assert!(!row.is_assignment());
    }

    #[test]
    fn test_numeric_cells_become_text() {
        let row = AssignmentRow::from_cells(&[
            CellValue::Text("Kim".into()),
            CellValue::Number(2024.0),
        ]);
        assert_eq!(row.title.as_deref(), Some("2024"));
    }

    #[test]
    fn test_assignment_rows_skip_header() {
        let grid = SheetGrid::new(
            "Kim",
            vec![
                cells(&["SCI", "Assignment"]),
                cells(&["Kim", "Task 1"]),
                cells(&[]),
            ],
        );
        let rows = assignment_rows(&grid);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title.as_deref(), Some("Task 1"));
        assert!(!rows[1].is_assignment());
    }
}
