use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sci-workload")]
#[command(about = "SCIワークロード管理ブックの集計・データ品質レポート", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 対象ブック（省略時は設定ファイルの値）
    #[arg(short, long, global = true)]
    pub workbook: Option<PathBuf>,

    /// 対象メンバー（カンマ区切り、省略時は設定ファイルの名簿）
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub members: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 工数入力状況のデータ品質レポート（JSON出力あり）
    Quality {
        /// 出力JSONファイル（デフォルト: 設定ファイルの値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (text/json/both)
        #[arg(short, long, default_value = "both")]
        format: ReportFormat,

        /// 入力率の低いメンバーの表示人数
        #[arg(long, default_value = "5")]
        worst: usize,
    },

    /// メンバーごとの課題件数（ステータス別・業務種別）
    Assignments {
        /// 上位表示人数
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// ダッシュボードタブの構造を表示
    Dashboard {
        /// シート名（省略時は設定ファイルの値）
        #[arg(long)]
        sheet: Option<String>,

        /// 見出し行の走査結果も表示
        #[arg(long)]
        sections: bool,
    },

    /// シート一覧と先頭行のプレビュー
    Sheets {
        /// 表示行数
        #[arg(long, default_value = "20")]
        rows: usize,

        /// 表示列数
        #[arg(long, default_value = "10")]
        cols: usize,
    },

    /// 1シートのヘッダーとデータ行を表示
    Inspect {
        /// シート名
        #[arg(required = true)]
        sheet: String,

        /// 表示行数
        #[arg(long, default_value = "20")]
        rows: usize,

        /// 表示列数
        #[arg(long, default_value = "10")]
        cols: usize,

        /// セルの最大表示幅
        #[arg(long, default_value = "30")]
        width: usize,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のブックを設定
        #[arg(long)]
        set_workbook: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レポート出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// 画面表示のみ
    Text,
    /// JSONファイルのみ
    Json,
    #[default]
    Both,
}

impl ReportFormat {
    pub fn prints_text(&self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }

    pub fn writes_json(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use text, json, or both", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Both => write!(f, "both"),
        }
    }
}
