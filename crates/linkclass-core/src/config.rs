use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{"result":"icafe"}`
    #[default]
    Json,
    /// Bare label, empty line when unrecognized.
    Plain,
}

/// Global configuration loaded from `~/.config/linkclass/config.toml`.
///
/// Only affects presentation; the host table is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkclassConfig {
    /// Output format for results.
    pub output: OutputFormat,
    /// Prompt shown by the interactive loop.
    pub prompt: String,
    /// URLs classified by `linkclass demo`.
    pub demo_urls: Vec<String>,
}

impl Default for LinkclassConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Json,
            prompt: "url> ".to_string(),
            demo_urls: vec![
                "https://console.cloud.baidu-int.com/devops/icafe/issue/OnlineApi-21205/show?source=copy-shortcut".to_string(),
                "https://ku.baidu-int.com/knowledge/HFVrC7hq1Q/iki-aVkbF_/9sd-6XkDV8/zRCXYKbDS6IZGF".to_string(),
                String::new(),
                "https://www.baidu.com".to_string(),
            ],
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkclass")?;
    Ok(xdg_dirs.get_config_home().join("linkclass").join("config.toml"))
}

/// Load configuration from `path`, falling back to defaults if it does not exist.
pub fn load_from(path: &Path) -> Result<LinkclassConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(LinkclassConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: LinkclassConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config directory.
pub fn load_or_default() -> Result<LinkclassConfig> {
    load_from(&config_path()?)
}
