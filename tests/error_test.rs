//! エラーケーステスト

use sci_workload::error::WorkloadError;

/// WorkloadErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        WorkloadError::Config("テスト設定エラー".to_string()),
        WorkloadError::WorkbookNotFound("book.xlsx".to_string()),
        WorkloadError::WorkbookOpen("book.xlsx".to_string()),
        WorkloadError::SheetNotFound("Josh".to_string()),
        WorkloadError::SheetRead("Josh".to_string()),
        WorkloadError::Export("out.json".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_sheet_not_found_message() {
    let err = WorkloadError::SheetNotFound("Dashboard".to_string());
    let display = format!("{}", err);
    assert!(display.contains("シート"));
    assert!(display.contains("Dashboard"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: WorkloadError = io_err.into();

    assert!(matches!(err, WorkloadError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: WorkloadError = json_err.into();

    assert!(matches!(err, WorkloadError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let common_err = sci_workload_common::Error::Io(io_err);
    let err: WorkloadError = common_err.into();

    assert!(matches!(err, WorkloadError::Common(_)));
    assert!(format!("{}", err).contains("disk full"));
}
