//! Capability trait implemented by every factory.

use std::sync::Arc;

use async_trait::async_trait;
use twinfield_config::TwinfieldConfig;
use twinfield_secure::{Response, Service, Session, SessionError};

use super::ResourceFactory;
use crate::FactoryError;

/// Shared operations of all resource factories.
///
/// Concrete factories embed a [`ResourceFactory`] and only implement
/// `base`/`base_mut`; everything else delegates to it.
#[async_trait]
pub trait Factory: Send + Sync {
    type Session: Session;

    fn base(&self) -> &ResourceFactory<Self::Session>;

    fn base_mut(&mut self) -> &mut ResourceFactory<Self::Session>;

    fn config(&self) -> &Arc<TwinfieldConfig> {
        self.base().config()
    }

    fn set_config(&mut self, config: Arc<TwinfieldConfig>) -> &mut Self {
        self.base_mut().set_config(config);
        self
    }

    fn session(&self) -> &Arc<Self::Session> {
        self.base().session()
    }

    fn derive_session(&mut self) -> Result<Arc<Self::Session>, FactoryError> {
        self.base_mut().derive_session()
    }

    async fn client(
        &self,
        path: &str,
    ) -> Result<<Self::Session as Session>::Client, SessionError> {
        self.base().client(path).await
    }

    fn service(&self) -> Service<Self::Session> {
        self.base().service()
    }

    fn response(&self) -> Result<&Arc<Response>, FactoryError> {
        self.base().response()
    }

    fn set_response(&mut self, response: Arc<Response>) -> &mut Self {
        self.base_mut().set_response(response);
        self
    }
}

impl<S: Session> Factory for ResourceFactory<S> {
    type Session = S;

    fn base(&self) -> &ResourceFactory<S> {
        self
    }

    fn base_mut(&mut self) -> &mut ResourceFactory<S> {
        self
    }
}
