use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ZenRows API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://api.zenrows.com/v1/";

/// Upstream fetch settings, optionally overridden by `~/.config/pdfetch/config.toml`.
///
/// Every field may be omitted from the file; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL of the scraping API. Query parameters are appended to it.
    pub endpoint: String,
    /// Total time budget for the upstream call, in seconds.
    pub timeout_secs: u64,
    /// Connect phase budget in seconds (None = bounded only by `timeout_secs`).
    pub connect_timeout_secs: Option<u64>,
    /// Ask the upstream for its premium/residential proxy tier.
    pub premium_proxy: bool,
    /// Redirect hops followed before giving up.
    pub max_redirections: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
            connect_timeout_secs: None,
            premium_proxy: true,
            max_redirections: 10,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    /// libcurl reads a zero timeout as "no limit", so zero is rejected.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be greater than 0");
        anyhow::ensure!(
            self.connect_timeout_secs != Some(0),
            "connect_timeout_secs must be greater than 0"
        );
        Ok(())
    }
}

/// Where the config file would live. The file is never created by pdfetch.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfetch")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults when no file exists.
pub fn load() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(FetchConfig::default());
    }
    load_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
