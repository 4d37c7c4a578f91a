//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod credentials;
mod endpoint;
mod system;

pub use credentials::*;
pub use endpoint::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration: everything needed to establish a remote session.
///
/// Once handed to a factory the config is shared behind an `Arc` and
/// never mutated; build a new one to change settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwinfieldConfig {
    pub credentials: CredentialsConfig,
    /// Default office code used by resource requests that need one.
    pub office: Option<String>,
    pub endpoint: EndpointConfig,
    pub timeouts: TimeoutConfig,
    pub logging: LoggingConfig,
}

impl TwinfieldConfig {
    /// Convenience constructor for the three logon credentials.
    pub fn with_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
        organisation: impl Into<String>,
    ) -> Self {
        Self {
            credentials: CredentialsConfig {
                username: username.into(),
                password: password.into(),
                organisation: organisation.into(),
            },
            ..Self::default()
        }
    }

    pub fn with_office(mut self, office: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self
    }

    /// Pin the cluster base URL instead of using the one returned at logon.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.endpoint.cluster = Some(cluster.into());
        self
    }

    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint.login_url = url.into();
        self
    }
}
