mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["./jellygrid.toml", "~/.config/jellygrid/config.toml"];

/// The per-user config location, where a new config file belongs.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATHS[1]).as_ref())
}

/// The config file a command reads: `custom_path` if given, else the first
/// default location that exists.
pub fn locate_config(custom_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = custom_path {
        return Some(path.to_path_buf());
    }

    DEFAULT_CONFIG_PATHS
        .iter()
        .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
        .find(|p| p.exists())
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    match locate_config(custom_path) {
        Some(path) => {
            tracing::debug!("Using config file {:?}", path);
            load_config(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Load config, apply command line overrides and validate the result.
///
/// The returned value is what every command works with; nothing mutates it
/// afterwards.
pub fn resolve_config(custom_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Config> {
    let mut config = load_config_or_default(custom_path)?;
    overrides.apply(&mut config);
    validate_config(&config)?;
    Ok(config)
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let server = &config.server;

    if server.url.trim().is_empty() {
        anyhow::bail!("Server url is not set (server.url or --server)");
    }

    let parsed = url::Url::parse(server.url.trim())
        .with_context(|| format!("Server url is not a valid URL: {}", server.url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        anyhow::bail!(
            "Server url must use http or https, got '{}'",
            parsed.scheme()
        );
    }

    if server.user_id.trim().is_empty() {
        anyhow::bail!("User id is not set (server.user_id or --user-id)");
    }

    if server.api_key.trim().is_empty() {
        anyhow::bail!("API key is not set (server.api_key or --api-key)");
    }

    let requested = config.display.columns;
    if requested != i64::from(config.display.columns()) {
        tracing::warn!(
            "Column count {} is out of range, using {}",
            requested,
            config.display.columns()
        );
    }

    Ok(())
}
