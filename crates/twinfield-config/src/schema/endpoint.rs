use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_URL: &str = "https://login.twinfield.com/webservices/session.asmx";

/// Where to log on, and optionally which cluster to talk to afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Session web service used for logon.
    pub login_url: String,
    /// Overrides the cluster URL returned by logon.
    pub cluster: Option<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.into(),
            cluster: None,
        }
    }
}
