//! Build-time Configuration
//!
//! Settings are baked in when the bundle is built (`TODOS_*` environment
//! variables seen by `trunk build`).

use log::LevelFilter;
use thiserror::Error;
use todo_api::{TransportKind, UnknownTransport};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3005";
pub const DEFAULT_HEADER_HEIGHT: u32 = 72;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Transport(#[from] UnknownTransport),
    #[error("invalid log level `{0}`")]
    LogLevel(String),
    #[error("invalid header height `{0}` (expected whole pixels)")]
    HeaderHeight(String),
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub transport: TransportKind,
    pub log_level: LevelFilter,
    /// Header height in pixels
    pub header_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            transport: TransportKind::default(),
            log_level: LevelFilter::Info,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

/// Raw values as read from the environment
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub api_base_url: Option<&'a str>,
    pub transport: Option<&'a str>,
    pub log_level: Option<&'a str>,
    pub header_height: Option<&'a str>,
}

impl AppConfig {
    /// Read the values compiled into this build
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(RawConfig {
            api_base_url: option_env!("TODOS_API_BASE_URL"),
            transport: option_env!("TODOS_TRANSPORT"),
            log_level: option_env!("TODOS_LOG_LEVEL"),
            header_height: option_env!("TODOS_HEADER_HEIGHT"),
        })
    }

    /// Missing values fall back to defaults; present values must parse.
    pub fn parse(raw: RawConfig<'_>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = match raw.api_base_url.map(str::trim) {
            Some("") => return Err(ConfigError::EmptyBaseUrl),
            Some(url) => url.trim_end_matches('/').to_string(),
            None => defaults.api_base_url,
        };

        let transport = match raw.transport {
            Some(value) => value.parse()?,
            None => defaults.transport,
        };

        let log_level = match raw.log_level {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::LogLevel(value.to_string()))?,
            None => defaults.log_level,
        };

        let header_height = match raw.header_height {
            Some(value) => value
                .trim()
                .trim_end_matches("px")
                .parse()
                .map_err(|_| ConfigError::HeaderHeight(value.to_string()))?,
            None => defaults.header_height,
        };

        Ok(Self {
            api_base_url,
            transport,
            log_level,
            header_height,
        })
    }
}
