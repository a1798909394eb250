use crate::error::{Result, WorkloadError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ブックのパスを上書きする環境変数
pub const WORKBOOK_ENV: &str = "SCI_WORKLOAD_WORKBOOK";

/// 既定の担当者名簿（個人シート名）
pub const DEFAULT_TEAM_MEMBERS: [&str; 18] = [
    "Ashley", "Brooke", "Dawn", "Jason", "Josh", "Kim", "Lisa",
    "Marisa", "Marty", "Matt", "Melissa", "Robin", "Sherry",
    "Trudy", "Van", "Yvette", "Tiffany", "Carrie",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub workbook_path: PathBuf,
    pub team_members: Vec<String>,
    pub output_file: PathBuf,
    pub dashboard_sheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook_path: PathBuf::from("documents/SCI Workload Tracker - New System.xlsx"),
            team_members: DEFAULT_TEAM_MEMBERS.iter().map(|s| s.to_string()).collect(),
            output_file: PathBuf::from(crate::export::DEFAULT_QUALITY_FILE),
            dashboard_sheet: "Dashboard".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WorkloadError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sci-workload").join("config.json"))
    }

    /// ブックのパスを決定
    ///
    /// 優先順: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_workbook(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| std::env::var_os(WORKBOOK_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.workbook_path.clone())
    }

    /// 名簿を決定（引数指定があればそちらを使う）
    pub fn resolve_members(&self, cli_override: &[String]) -> Vec<String> {
        if cli_override.is_empty() {
            self.team_members.clone()
        } else {
            cli_override.to_vec()
        }
    }

    pub fn set_workbook(&mut self, path: PathBuf) -> Result<()> {
        self.workbook_path = path;
        self.save()
    }
}
