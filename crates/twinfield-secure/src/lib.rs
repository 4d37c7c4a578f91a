//! Session layer for the Twinfield SOAP web services.
//!
//! Provides:
//! - The [`Session`] trait: derive a session from a config, hand out RPC
//!   clients bound to a resource endpoint
//! - [`Login`], the real session, which logs on lazily and caches the
//!   session id and cluster
//! - [`SoapClient`] handles, [`Service`] handles and the [`Response`]
//!   envelope for ProcessXml documents

pub mod client;
pub mod endpoint;
pub mod login;
pub mod response;
pub mod service;
pub mod soap;

use std::sync::Arc;

use async_trait::async_trait;
use twinfield_config::TwinfieldConfig;

pub use client::SoapClient;
pub use endpoint::Endpoint;
pub use login::Login;
pub use response::{MessageKind, Response, ResponseMessage};
pub use service::Service;

/// An authenticated context that produces RPC clients for remote resources.
///
/// Implementations own the authentication handshake. They must be safe to
/// share between threads: clients may be requested concurrently.
#[async_trait]
pub trait Session: Send + Sync + Sized + 'static {
    /// RPC client handle bound to one resolved endpoint.
    type Client: Send;

    /// Build a new session from `config`. No network I/O is required here.
    fn derive(config: Arc<TwinfieldConfig>) -> Result<Self, SessionError>;

    /// The config this session was derived from.
    fn config(&self) -> &Arc<TwinfieldConfig>;

    /// Produce a client for `endpoint`, resolved against the session's base address.
    async fn client(&self, endpoint: &Endpoint) -> Result<Self::Client, SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session initialization failed: {0}")]
    Initialization(String),
    #[error("transport unavailable: {0}")]
    TransportUnavailable(String),
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("SOAP fault {code}: {message}")]
    Fault { code: String, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
