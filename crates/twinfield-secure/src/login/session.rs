//! Login struct and its `Session` implementation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use twinfield_config::{validate_credentials, TwinfieldConfig};

use crate::{Endpoint, Session, SessionError, SoapClient};

use super::logon::LogonState;

/// Session backed by a Twinfield logon.
pub struct Login {
    pub(super) config: Arc<TwinfieldConfig>,
    pub(super) http: reqwest::Client,
    /// Cached logon; `None` until the first client request.
    pub(super) state: Mutex<Option<LogonState>>,
}

impl Login {
    /// Whether a logon is currently cached.
    pub async fn is_logged_on(&self) -> bool {
        self.state.lock().await.is_some()
    }

    /// Cluster of the cached logon, if any.
    pub async fn cluster(&self) -> Option<String> {
        self.state.lock().await.as_ref().map(|s| s.cluster.clone())
    }

    /// Drop the cached logon so the next client request logs on again.
    ///
    /// Clients already handed out keep their old session id.
    pub async fn invalidate(&self) {
        if self.state.lock().await.take().is_some() {
            debug!("dropped cached logon");
        }
    }
}

#[async_trait]
impl Session for Login {
    type Client = SoapClient;

    fn derive(config: Arc<TwinfieldConfig>) -> Result<Self, SessionError> {
        validate_credentials(&config).map_err(|e| SessionError::Initialization(e.to_string()))?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.timeouts.connect())
            .timeout(config.timeouts.request())
            .build()
            .map_err(|e| {
                SessionError::Initialization(format!("failed to build HTTP client: {e}"))
            })?;

        debug!(
            organisation = %config.credentials.organisation,
            login_url = %config.endpoint.login_url,
            "derived login session"
        );

        Ok(Self {
            config,
            http,
            state: Mutex::new(None),
        })
    }

    fn config(&self) -> &Arc<TwinfieldConfig> {
        &self.config
    }

    async fn client(&self, endpoint: &Endpoint) -> Result<SoapClient, SessionError> {
        let state = self.logon().await?;
        let address = endpoint.resolve(&state.cluster);
        Ok(SoapClient::new(self.http.clone(), address, state.session_id))
    }
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("username", &self.config.credentials.username)
            .field("organisation", &self.config.credentials.organisation)
            .field("login_url", &self.config.endpoint.login_url)
            .finish_non_exhaustive()
    }
}
