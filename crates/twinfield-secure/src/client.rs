//! RPC client handle bound to one resolved endpoint.

use tracing::debug;
use twinfield_common::{new_correlation_id, SessionId};

use crate::{soap, SessionError};

/// SOAP client for one web service on the session's cluster.
///
/// Handles are cheap to create and are not cached; each one carries the
/// session id it was issued with and stays usable for as long as the
/// remote session does.
#[derive(Debug, Clone)]
pub struct SoapClient {
    http: reqwest::Client,
    address: String,
    session_id: SessionId,
}

impl SoapClient {
    pub(crate) fn new(http: reqwest::Client, address: String, session_id: SessionId) -> Self {
        Self {
            http,
            address,
            session_id,
        }
    }

    /// Fully resolved address this client posts to.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Invoke `operation` with `body` as the SOAP body and return the raw reply.
    pub async fn call(&self, operation: &str, body: &str) -> Result<String, SessionError> {
        let cid = new_correlation_id();
        debug!(%cid, operation, address = %self.address, "calling remote operation");

        let envelope = soap::envelope(Some(self.session_id.as_str()), body);
        let reply = soap::post(&self.http, &self.address, operation, envelope).await;

        match &reply {
            Ok(text) => debug!(%cid, bytes = text.len(), "remote operation completed"),
            Err(e) => debug!(%cid, error = %e, "remote operation failed"),
        }
        reply
    }
}
