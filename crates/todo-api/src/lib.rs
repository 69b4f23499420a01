//! Todo API Client
//!
//! Typed access to the `todos` resource:
//! - models: records and request payloads
//! - request: request building and response parsing (no I/O)
//! - transport: pluggable carriers (browser HTTP, desktop bridge)
//! - client: `TodoClient`, the operations the UI calls

pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod transport;

pub use client::TodoClient;
pub use error::{ApiError, ApiResult};
pub use models::{CreateTodo, Todo, TodoCollection, UpdateTodo};
pub use request::{ApiRequest, ApiResponse, Method};
pub use transport::{HttpTransport, TauriTransport, Transport, TransportKind, UnknownTransport};
