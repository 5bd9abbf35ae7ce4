use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::HeaderStyle;

pub const API_URL_ENV: &str = "REPO_README_API_URL";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GitHubConfig {
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: "README-Generator".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub header_style: HeaderStyle,
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::Classic,
            file_name: "README.md".to_string(),
        }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Writes the default config on first run. Returns true if a file was created.
    pub fn ensure_exists(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::create_default(path)?;
        Ok(true)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    /// Environment overrides are applied in both cases.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };

        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            if !api_url.trim().is_empty() {
                config.github.api_url = api_url;
            }
        }

        Ok(config)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "repo-readme", "repo-readme")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
