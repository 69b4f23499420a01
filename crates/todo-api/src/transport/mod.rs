//! Transports
//!
//! A transport carries one `ApiRequest` to the server and hands back the raw
//! `ApiResponse`. Status interpretation stays in the client.
//!
//! Futures are not `Send`: in the browser every request runs on the one
//! event-loop thread.

mod http;
mod tauri;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::request::{ApiRequest, ApiResponse};

pub use http::HttpTransport;
pub use tauri::TauriTransport;

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    /// Short name shown in the UI and in logs
    fn name(&self) -> &'static str;

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// Which transport to build at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    /// Plain HTTP through the browser
    #[default]
    Http,
    /// HTTP through the desktop runtime's bridge
    Tauri,
}

impl TransportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Http => "http",
            TransportKind::Tauri => "tauri",
        }
    }

    /// Build the transport bound to `base_url`
    pub fn connect(self, base_url: &str) -> Box<dyn Transport> {
        match self {
            TransportKind::Http => Box::new(HttpTransport::new(base_url)),
            TransportKind::Tauri => Box::new(TauriTransport::new(base_url)),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport `{0}` (expected `http` or `tauri`)")]
pub struct UnknownTransport(pub String);

impl FromStr for TransportKind {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(TransportKind::Http),
            "tauri" => Ok(TransportKind::Tauri),
            other => Err(UnknownTransport(other.to_string())),
        }
    }
}

/// Join a base URL and a request path without doubling the slash
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
