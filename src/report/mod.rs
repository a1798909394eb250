//! テキストレポート生成
//!
//! 各関数は表示用の文字列を返し、出力はmain側で行う。

pub mod quality;
pub mod assignments;
pub mod dashboard;
pub mod preview;

pub use quality::render_quality;
pub use assignments::render_assignments;
pub use dashboard::render_dashboard;
pub use preview::{render_inspect, render_sheet_preview, render_sheet_list};

/// 区切り線の幅
pub const HEAVY_WIDTH_NARROW: usize = 70;
pub const HEAVY_WIDTH: usize = 80;
pub const HEAVY_WIDTH_WIDE: usize = 100;
pub const HEAVY_WIDTH_FULL: usize = 120;

pub fn rule(c: char, width: usize) -> String {
    std::iter::repeat(c).take(width).collect()
}

/// 幅を超える文字列を `...` 付きで切り詰める（文字数基準）
pub fn truncate_with_ellipsis(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
