//! Resource endpoints relative to a session's base address.

use crate::SessionError;

/// A remote resource path, resolved against a base address (the cluster)
/// when a client is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
}

impl Endpoint {
    pub const PROCESS_XML: &'static str = "/webservices/processxml.asmx";
    pub const FINDER: &'static str = "/webservices/finder.asmx";

    pub fn new(path: impl Into<String>) -> Result<Self, SessionError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(SessionError::InvalidEndpoint("empty resource path".into()));
        }
        Ok(Self { path })
    }

    /// The ProcessXml document service.
    pub fn process_xml() -> Self {
        Self {
            path: Self::PROCESS_XML.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Join `base` and the resource path with exactly one `/` between them.
    pub fn resolve(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{base}{}", self.path)
        } else {
            format!("{base}/{}", self.path)
        }
    }
}
