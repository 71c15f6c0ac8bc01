use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per probe (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

/// HTTP capability used for probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Curl,
    None,
}

/// Per-probe request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// `User-Agent` sent when no inbound request identity is available.
    pub user_agent: String,
    /// Verify TLS peer and host names.
    pub verify_ssl: bool,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    pub max_redirections: u32,
    pub transport: TransportKind,
    /// With `transport = "none"`, fall back to a bare fetch instead of failing.
    pub allow_plain_fetch: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            verify_ssl: false,
            connect_timeout_secs: 10,
            timeout_secs: 30,
            max_redirections: 10,
            transport: TransportKind::Curl,
            allow_plain_fetch: true,
        }
    }
}

/// Global configuration loaded from `~/.config/urlprobe/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlProbeConfig {
    /// Overall time budget for one base-host resolution (None = unbounded).
    #[serde(default)]
    pub resolve_deadline_secs: Option<u64>,
    #[serde(default)]
    pub probe: ProbeConfig,
    /// Optional retry policy for transient failures; if missing, each probe is a single attempt.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlprobe")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlProbeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlProbeConfig::default();
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
pub fn load_from(path: &Path) -> Result<UrlProbeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlProbeConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
