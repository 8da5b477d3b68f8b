//! Configuration loaded from `~/.config/urlup/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch_head::{default_user_agent, FetchOptions, ProbeMethod};
use crate::mime_table::MimeTable;

/// Global configuration for probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlupConfig {
    /// Seconds allowed for the TCP/TLS connect.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole header fetch.
    pub timeout_secs: u64,
    /// Follow `Location` redirects; the final response decides the status.
    pub follow_redirects: bool,
    pub max_redirects: u32,
    /// "head" (default) or "get" for servers that refuse HEAD.
    #[serde(default)]
    pub method: ProbeMethod,
    /// Overrides the default `urlup/<version>` User-Agent.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Extra request headers sent with every probe.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Extension to MIME type entries layered over the builtin table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mime_types: BTreeMap<String, String>,
}

impl Default for UrlupConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
            max_redirects: 10,
            method: ProbeMethod::Head,
            user_agent: None,
            headers: BTreeMap::new(),
            mime_types: BTreeMap::new(),
        }
    }
}

impl UrlupConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            method: self.method,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            follow_redirects: self.follow_redirects,
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone().unwrap_or_else(default_user_agent),
            headers: self.headers.clone(),
        }
    }

    /// Builtin table plus `mime_types`.
    pub fn mime_table(&self) -> MimeTable {
        MimeTable::with_overrides(&self.mime_types)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlup")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlupConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlupConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlupConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UrlupConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
