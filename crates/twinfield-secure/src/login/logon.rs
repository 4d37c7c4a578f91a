//! The logon handshake.

use tracing::{info, warn};
use twinfield_common::SessionId;

use crate::{soap, SessionError};

use super::session::Login;

/// What a successful logon hands back.
#[derive(Debug, Clone)]
pub struct LogonState {
    pub session_id: SessionId,
    /// Base URL every resource endpoint is resolved against.
    pub cluster: String,
}

impl Login {
    /// Return the cached logon, logging on first if there is none.
    ///
    /// The lock is held across the request so concurrent callers share a
    /// single logon.
    pub async fn logon(&self) -> Result<LogonState, SessionError> {
        let mut guard = self.state.lock().await;
        if let Some(ref state) = *guard {
            return Ok(state.clone());
        }

        let state = self.request_logon().await?;
        *guard = Some(state.clone());
        Ok(state)
    }

    async fn request_logon(&self) -> Result<LogonState, SessionError> {
        let credentials = &self.config.credentials;
        info!(
            user = %credentials.username,
            organisation = %credentials.organisation,
            "logging on"
        );

        let body = soap::logon_body(
            &credentials.username,
            &credentials.password,
            &credentials.organisation,
        );
        let reply = soap::post(
            &self.http,
            &self.config.endpoint.login_url,
            "Logon",
            soap::envelope(None, &body),
        )
        .await?;

        let result = soap::element_text(&reply, "LogonResult")?
            .ok_or_else(|| SessionError::Parse("missing LogonResult".into()))?;
        if result != "Ok" {
            warn!(result = %result, "logon rejected");
            return Err(SessionError::Authentication(format!(
                "logon rejected: {result}"
            )));
        }

        let session_id = soap::element_text(&reply, "SessionID")?
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SessionError::Parse("missing SessionID header".into()))?;

        let cluster = match self.config.endpoint.cluster {
            Some(ref pinned) => pinned.clone(),
            None => soap::element_text(&reply, "cluster")?
                .filter(|s| !s.is_empty())
                .ok_or_else(|| SessionError::Parse("missing cluster".into()))?,
        };

        info!(cluster = %cluster, "logged on");
        Ok(LogonState {
            session_id: SessionId::new(session_id),
            cluster,
        })
    }
}
