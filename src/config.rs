use crate::error::{HomeInOnError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_ASSET_BASE_URL: &str = "https://homeinon-backend.onrender.com";
pub const DEFAULT_CATALOG_PATH: &str = "products_clean.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    /// 相対パスの画像URLを解決する基準URL
    pub asset_base_url: String,
    pub catalog_path: PathBuf,
    /// AI呼び出しのタイムアウト
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".into(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.into(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            timeout_seconds: 15,
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書きする
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Ok(Self::read_file(&config_path)?.with_env_overrides(env_lookup))
    }

    /// 設定ファイルが壊れていても既定値で続行する（環境変数は適用する）
    pub fn load_or_default() -> Self {
        let config = match Self::config_path() {
            Ok(path) => Self::read_file_or_default(&path),
            Err(e) => {
                warn!(error = %e, "config path unavailable, using defaults");
                Self::default()
            }
        };
        config.with_env_overrides(env_lookup)
    }

    pub fn read_file_or_default(path: &Path) -> Self {
        Self::read_file(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "config file unreadable, using defaults");
            Self::default()
        })
    }

    /// ファイルが無ければ既定値
    pub fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 環境変数による上書き（空文字は無視）
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty("ASSET_BASE_URL") {
            self.asset_base_url = url.trim().to_string();
        }
        if let Some(key) = non_empty("GEMINI_API_KEY") {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(path) = non_empty("HOMEINON_CATALOG") {
            self.catalog_path = PathBuf::from(path.trim());
        }
        self
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
            .ok_or_else(|| HomeInOnError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("homeinon").join("config.json"))
    }

    /// APIキー（未設定ならエラー）
    pub fn get_api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(HomeInOnError::MissingApiKey)
    }

    pub fn has_api_key(&self) -> bool {
        self.get_api_key().is_ok()
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}
