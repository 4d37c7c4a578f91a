//! The base factory and its capability trait.

mod traits;


pub use traits::Factory;

use std::sync::Arc;

use tracing::debug;
use twinfield_config::TwinfieldConfig;
use twinfield_secure::{Endpoint, Login, Response, Service, Session, SessionError};

use crate::FactoryError;

/// Base state shared by every resource factory.
///
/// A value of this type always holds a session: construction derives one
/// or fails. Mutators take `&mut self`, so sharing a factory between tasks
/// requires the caller to serialize `set_config`, `derive_session` and
/// `set_response`. `client` and `service` only need `&self`.
pub struct ResourceFactory<S: Session = Login> {
    config: Arc<TwinfieldConfig>,
    session: Arc<S>,
    response: Option<Arc<Response>>,
}

impl<S: Session> ResourceFactory<S> {
    /// Store `config` and derive a session from it.
    pub fn new(config: impl Into<Arc<TwinfieldConfig>>) -> Result<Self, FactoryError> {
        let config = config.into();
        let session = derive::<S>(&config)?;
        Ok(Self {
            config,
            session,
            response: None,
        })
    }

    /// Replace the stored config.
    ///
    /// The session is NOT re-derived: clients keep coming from the session
    /// built for the previous config until [`derive_session`](Self::derive_session)
    /// is called.
    pub fn set_config(&mut self, config: impl Into<Arc<TwinfieldConfig>>) -> &mut Self {
        self.config = config.into();
        debug!("config replaced, session left bound to the previous config");
        self
    }

    pub fn config(&self) -> &Arc<TwinfieldConfig> {
        &self.config
    }

    /// Derive a fresh session from the current config and store it.
    ///
    /// On failure the previous session stays in place. Clients obtained
    /// from the previous session are not invalidated.
    pub fn derive_session(&mut self) -> Result<Arc<S>, FactoryError> {
        let session = derive::<S>(&self.config)?;
        self.session = Arc::clone(&session);
        Ok(session)
    }

    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    /// Ask the current session for a client bound to `path`.
    ///
    /// Session errors are returned unchanged.
    pub async fn client(&self, path: &str) -> Result<S::Client, SessionError> {
        let endpoint = Endpoint::new(path)?;
        self.session.client(&endpoint).await
    }

    /// A new service handle over the current session.
    pub fn service(&self) -> Service<S> {
        Service::new(Arc::clone(&self.session))
    }

    /// Store the response of the latest call, replacing any previous one.
    pub fn set_response(&mut self, response: impl Into<Arc<Response>>) -> &mut Self {
        self.response = Some(response.into());
        self
    }

    pub fn response(&self) -> Result<&Arc<Response>, FactoryError> {
        self.response.as_ref().ok_or(FactoryError::NoResponseYet)
    }
}

fn derive<S: Session>(config: &Arc<TwinfieldConfig>) -> Result<Arc<S>, FactoryError> {
    debug!(
        organisation = %config.credentials.organisation,
        "deriving session"
    );
    S::derive(Arc::clone(config))
        .map(Arc::new)
        .map_err(FactoryError::SessionInitialization)
}

impl<S: Session> std::fmt::Debug for ResourceFactory<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceFactory")
            .field("config", &self.config)
            .field("has_response", &self.response.is_some())
            .finish_non_exhaustive()
    }
}
