//! SCIワークロード管理ブックの集計ツール

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod workbook;
pub mod analysis;
pub mod report;
pub mod export;
