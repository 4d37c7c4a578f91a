//! Resource factories.
//!
//! Every per-resource factory embeds a [`ResourceFactory`], which holds the
//! config, the session derived from it, and the last response a call
//! produced. The [`Factory`] trait exposes the same operations on any type
//! that embeds one.

pub mod factory;

pub use factory::{Factory, ResourceFactory};
pub use twinfield_secure::{Endpoint, Login, Response, Service, Session, SessionError};

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Deriving a session from the current config failed.
    #[error("session initialization failed: {0}")]
    SessionInitialization(#[source] SessionError),
    /// No response has been stored since the factory was built.
    #[error("no response has been set yet")]
    NoResponseYet,
}
