//! ステータス分類
//!
//! シートのステータス欄は自由記述のため、部分一致で分類する（大文字小文字は区別）。

use serde::{Deserialize, Serialize};

/// ステータス区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    Completed,
    OnHold,
    Active,
    Unclassified,
}

impl StatusClass {
    /// ステータス文字列を分類
    ///
    /// 判定順: "Complete" → "Hold" → "Progress"/"Planning"
    pub fn classify(status: Option<&str>) -> Self {
        let Some(status) = status else {
            return StatusClass::Unclassified;
        };

        if status.contains("Complete") {
            StatusClass::Completed
        } else if status.contains("Hold") {
            StatusClass::OnHold
        } else if status.contains("Progress") || status.contains("Planning") {
            StatusClass::Active
        } else {
            StatusClass::Unclassified
        }
    }

    /// "Progress"/"Planning" を含むか（完了・保留の表記は見ない）
    ///
    /// データ品質集計の進行中判定に使う。
    pub fn has_active_marker(status: Option<&str>) -> bool {
        status.is_some_and(|s| s.contains("Progress") || s.contains("Planning"))
    }
}
