//! 集計結果のファイル出力

use crate::error::{Result, WorkloadError};
use sci_workload_common::QualityReport;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// 既定の出力ファイル名
pub const DEFAULT_QUALITY_FILE: &str = "data-quality-analysis.json";

/// 出力先がディレクトリなら既定のファイル名を付ける
pub fn output_path_for_json(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(DEFAULT_QUALITY_FILE)
    } else {
        output.to_path_buf()
    }
}

/// データ品質レポートをJSONで保存
pub fn export_quality_json(report: &QualityReport, output: &Path) -> Result<PathBuf> {
    let output_path = output_path_for_json(output);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&output_path).map_err(|e| {
        WorkloadError::Export(format!("{}: {}", output_path.display(), e))
    })?;
    report.write_json(BufWriter::new(file))?;

    Ok(output_path)
}
