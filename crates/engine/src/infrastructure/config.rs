//! Engine configuration loaded from environment variables.
//!
//! | Variable | Default | Notes |
//! |----------|---------|-------|
//! | `SERVER_HOST` | `0.0.0.0` | |
//! | `SERVER_PORT` / `GIN_APP_PORT` / `PORT` | `8080` | first one set wins, `1000..=9999` |
//! | `DEFAULT_BOARD_SIZE` | `9` | used when a create request omits `size` |
//! | `DEFAULT_BOMB_COUNT` | `10` | used when a create request omits `bombs` |
//! | `CORS_ALLOWED_ORIGINS` | unset | `*` or comma-separated origins |

use std::str::FromStr;

use minefield_domain::value_objects::Board;
use minefield_domain::DomainError;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const MIN_SERVER_PORT: u16 = 1000;
pub const MAX_SERVER_PORT: u16 = 9999;

/// Classic beginner minefield.
pub const DEFAULT_BOARD_SIZE: u32 = 9;
pub const DEFAULT_BOMB_COUNT: u32 = 10;

const PORT_KEYS: [&str; 3] = ["SERVER_PORT", "GIN_APP_PORT", "PORT"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("{key}={value} is outside the allowed range {min}..={max}")]
    OutOfRange {
        key: &'static str,
        value: u32,
        min: u16,
        max: u16,
    },

    #[error("Default board is invalid: {0}")]
    InvalidDefaultBoard(#[from] DomainError),
}

/// Board dimensions applied when a create request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDefaults {
    pub size: u32,
    pub bomb_count: u32,
}

impl Default for BoardDefaults {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            bomb_count: DEFAULT_BOMB_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub board_defaults: BoardDefaults,
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            board_defaults: BoardDefaults::default(),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string());

        let server_port = match PORT_KEYS
            .iter()
            .find_map(|key| get(*key).map(|value| (*key, value)))
        {
            Some((key, value)) => {
                // Parsed wider than u16 so oversized ports report as out of range.
                let port: u32 = parse(key, &value)?;
                match u16::try_from(port) {
                    Ok(port) if (MIN_SERVER_PORT..=MAX_SERVER_PORT).contains(&port) => port,
                    _ => {
                        return Err(ConfigError::OutOfRange {
                            key,
                            value: port,
                            min: MIN_SERVER_PORT,
                            max: MAX_SERVER_PORT,
                        })
                    }
                }
            }
            None => DEFAULT_SERVER_PORT,
        };

        let size = match get("DEFAULT_BOARD_SIZE") {
            Some(value) => parse("DEFAULT_BOARD_SIZE", &value)?,
            None => DEFAULT_BOARD_SIZE,
        };
        let bomb_count = match get("DEFAULT_BOMB_COUNT") {
            Some(value) => parse("DEFAULT_BOMB_COUNT", &value)?,
            None => DEFAULT_BOMB_COUNT,
        };
        // Defaults feed straight into create, so they must be a legal board.
        Board::new(size, bomb_count)?;

        Ok(Self {
            server_host,
            server_port,
            board_defaults: BoardDefaults { size, bomb_count },
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        })
    }

    /// `host:port` string suitable for `SocketAddr` parsing.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotANumber {
        key,
        value: value.to_string(),
    })
}
