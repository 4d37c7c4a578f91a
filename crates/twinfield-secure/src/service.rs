//! Session-wrapping service handle.

use std::sync::Arc;

use twinfield_common::HandleId;

use crate::login::Login;
use crate::{soap, Endpoint, Response, Session, SessionError, SoapClient};

/// Handle for callers that need session-level operations.
///
/// Every handle gets its own [`HandleId`]; several handles may wrap the
/// same session.
pub struct Service<S: Session = Login> {
    id: HandleId,
    session: Arc<S>,
}

impl<S: Session> Service<S> {
    pub fn new(session: Arc<S>) -> Self {
        Self {
            id: HandleId::new(),
            session,
        }
    }

    pub fn id(&self) -> &HandleId {
        &self.id
    }

    pub fn session(&self) -> &Arc<S> {
        &self.session
    }
}

impl<S: Session<Client = SoapClient>> Service<S> {
    /// Submit an XML document through ProcessXml and parse the returned document.
    pub async fn send(&self, document: &str) -> Result<Response, SessionError> {
        let client = self.session.client(&Endpoint::process_xml()).await?;
        let reply = client
            .call("ProcessXmlString", &soap::process_xml_body(document))
            .await?;

        let xml = soap::element_text(&reply, "ProcessXmlStringResult")?
            .ok_or_else(|| SessionError::Parse("missing ProcessXmlStringResult".into()))?;
        Response::from_xml(xml)
    }
}

impl<S: Session> std::fmt::Debug for Service<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service").field("id", &self.id).finish()
    }
}
