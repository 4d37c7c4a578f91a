use std::fmt;

use serde::{Deserialize, Serialize};

/// Logon credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
    pub organisation: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("organisation", &self.organisation)
            .finish()
    }
}
