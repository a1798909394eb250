use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ブックが見つかりません: {0}")]
    WorkbookNotFound(String),

    #[error("ブックを開けません: {0}")]
    WorkbookOpen(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("シート読み込みエラー: {0}")]
    SheetRead(String),

    #[error("出力エラー: {0}")]
    Export(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] sci_workload_common::Error),
}

pub type Result<T> = std::result::Result<T, WorkloadError>;
