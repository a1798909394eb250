//! 工数サイズ → 推定時間（週あたり）の変換

use serde::{Deserialize, Serialize};
use std::fmt;

/// 工数サイズ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffortSize {
    XS,
    S,
    M,
    L,
    XL,
}

/// 判定順
///
/// 部分一致で判定するため長いコードを先に置く（"XS"が"S"に、"XL"が"L"に化けないように）
pub const MATCH_ORDER: [EffortSize; 5] = [
    EffortSize::XL,
    EffortSize::XS,
    EffortSize::S,
    EffortSize::M,
    EffortSize::L,
];

impl EffortSize {
    /// 推定時間
    pub fn hours(self) -> f64 {
        match self {
            EffortSize::XS => 0.5,
            EffortSize::S => 1.5,
            EffortSize::M => 3.5,
            EffortSize::L => 7.5,
            EffortSize::XL => 15.0,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            EffortSize::XS => "XS",
            EffortSize::S => "S",
            EffortSize::M => "M",
            EffortSize::L => "L",
            EffortSize::XL => "XL",
        }
    }

    /// ラベルからサイズを判定（大文字化・前後空白除去後の部分一致）
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_uppercase();
        MATCH_ORDER
            .into_iter()
            .find(|size| normalized.contains(size.code()))
    }
}

impl fmt::Display for EffortSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// 工数ラベルを推定時間に変換。不明なラベル・未入力はNone
pub fn effort_hours(label: Option<&str>) -> Option<f64> {
    label.and_then(EffortSize::from_label).map(EffortSize::hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_codes() {
        assert_eq!(effort_hours(Some("XS")), Some(0.5));
        assert_eq!(effort_hours(Some("S")), Some(1.5));
        assert_eq!(effort_hours(Some("M")), Some(3.5));
        assert_eq!(effort_hours(Some("L")), Some(7.5));
        assert_eq!(effort_hours(Some("XL")), Some(15.0));
    }

    #[test]
    fn test_longest_code_first() {
        // "S"より先に"XS"を判定
        assert_eq!(EffortSize::from_label("XS"), Some(EffortSize::XS));
        assert_eq!(EffortSize::from_label("xl"), Some(EffortSize::XL));
    }

    #[test]
    fn test_normalization() {
        assert_eq!(effort_hours(Some("  m ")), Some(3.5));
        assert_eq!(effort_hours(Some("M - Medium")), Some(3.5));
        assert_eq!(effort_hours(Some("xs (< 1 hr/wk)")), Some(0.5));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(effort_hours(None), None);
        assert_eq!(effort_hours(Some("")), None);
        assert_eq!(effort_hours(Some("TBD")), None);
        assert_eq!(effort_hours(Some("?")), None);
        assert_eq!(effort_hours(Some("42")), None);
    }

    #[test]
    fn test_idempotent() {
        for label in ["XS", "s", "Medium", "large", "??", "XL+"] {
            assert_eq!(effort_hours(Some(label)), effort_hours(Some(label)));
        }
    }

    #[test]
    fn test_match_order_longest_first() {
        let lengths: Vec<usize> = MATCH_ORDER.iter().map(|s| s.code().len()).collect();
        assert_eq!(lengths, vec![2, 2, 1, 1, 1]);
    }
}
