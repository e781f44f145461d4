//! Server configuration.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_VAR: &str = "TRIP_SORTER_ADDR";

/// Environment variable holding the per-request card limit.
pub const MAX_CARDS_VAR: &str = "TRIP_SORTER_MAX_CARDS";

/// Error from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    /// Card limit must allow at least one card
    #[error("TRIP_SORTER_MAX_CARDS must be at least 1")]
    ZeroMaxCards,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Maximum number of boarding cards accepted in one request.
    /// Larger requests are rejected before sorting.
    pub max_cards: usize,
}

impl AppConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bind_addr: SocketAddr, max_cards: usize) -> Self {
        Self {
            bind_addr,
            max_cards,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: ADDR_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(MAX_CARDS_VAR) {
            config.max_cards = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: MAX_CARDS_VAR,
                    value: value.clone(),
                })?;
            if config.max_cards == 0 {
                return Err(ConfigError::ZeroMaxCards);
            }
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_cards: 1000,
        }
    }
}
