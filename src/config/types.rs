use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest grid width the launcher accepts.
pub const MIN_COLUMNS: u8 = 1;
/// Largest grid width the launcher accepts.
pub const MAX_COLUMNS: u8 = 7;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base address of the media server, e.g. `http://jellyfin.local:8096`
    #[serde(default)]
    pub url: String,

    /// Id of the user whose library is listed
    #[serde(default)]
    pub user_id: String,

    /// API key sent as the `ApiKey` query parameter
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Requested number of grid columns (clamped to 1..=7 on use)
    #[serde(default = "default_columns")]
    pub columns: i64,
}

fn default_columns() -> i64 {
    5
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl DisplayConfig {
    /// Column count clamped to the supported range.
    pub fn columns(&self) -> u8 {
        clamp_columns(self.columns)
    }
}

pub fn clamp_columns(requested: i64) -> u8 {
    requested.clamp(MIN_COLUMNS as i64, MAX_COLUMNS as i64) as u8
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in seconds. Unset means the transport default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub server: Option<String>,
    pub user_id: Option<String>,
    pub api_key: Option<String>,
    pub columns: Option<i64>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut Config) {
        if let Some(url) = self.server {
            config.server.url = url;
        }
        if let Some(user_id) = self.user_id {
            config.server.user_id = user_id;
        }
        if let Some(api_key) = self.api_key {
            config.server.api_key = api_key;
        }
        if let Some(columns) = self.columns {
            config.display.columns = columns;
        }
    }
}
