//! Environment variable overlay.
//!
//! Values found in the environment win over the config file, so secrets
//! can stay out of `config.toml`.

use tracing::debug;

use crate::schema::TwinfieldConfig;

pub const ENV_USERNAME: &str = "TWINFIELD_USERNAME";
pub const ENV_PASSWORD: &str = "TWINFIELD_PASSWORD";
pub const ENV_ORGANISATION: &str = "TWINFIELD_ORGANISATION";
pub const ENV_OFFICE: &str = "TWINFIELD_OFFICE";
pub const ENV_CLUSTER: &str = "TWINFIELD_CLUSTER";
pub const ENV_LOGIN_URL: &str = "TWINFIELD_LOGIN_URL";

/// Overlay process environment variables onto `config`.
pub fn apply_env(config: &mut TwinfieldConfig) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

/// Overlay values from an arbitrary lookup onto `config`.
///
/// Empty values are ignored.
pub fn apply_env_from<F>(config: &mut TwinfieldConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(v) = get(ENV_USERNAME) {
        config.credentials.username = v;
    }
    if let Some(v) = get(ENV_PASSWORD) {
        config.credentials.password = v;
    }
    if let Some(v) = get(ENV_ORGANISATION) {
        config.credentials.organisation = v;
    }
    if let Some(v) = get(ENV_OFFICE) {
        config.office = Some(v);
    }
    if let Some(v) = get(ENV_CLUSTER) {
        debug!(cluster = %v, "cluster pinned from environment");
        config.endpoint.cluster = Some(v);
    }
    if let Some(v) = get(ENV_LOGIN_URL) {
        config.endpoint.login_url = v;
    }
}
