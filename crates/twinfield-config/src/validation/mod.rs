//! Configuration validation.
//!
//! `validate` checks ranges and URL formats and collects every problem into
//! a single `ConfigError`. Credentials are checked separately by
//! `validate_credentials` because a config file without them is still
//! usable once the environment fills them in.

mod helpers;


use crate::schema::TwinfieldConfig;
use helpers::{validate_http_url, validate_range};
use twinfield_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TwinfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "timeouts.connect_secs",
        config.timeouts.connect_secs,
        1,
        600,
    );
    validate_range(
        &mut errors,
        "timeouts.request_secs",
        config.timeouts.request_secs,
        1,
        600,
    );

    validate_http_url(&mut errors, "endpoint.login_url", &config.endpoint.login_url);
    if let Some(ref cluster) = config.endpoint.cluster {
        validate_http_url(&mut errors, "endpoint.cluster", cluster);
    }

    if let Some(ref office) = config.office {
        if office.trim().is_empty() {
            errors.push("office is set but empty".into());
        }
    }

    finish(errors)
}

/// Check that all logon credentials are present.
pub fn validate_credentials(config: &TwinfieldConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();
    let credentials = &config.credentials;

    for (name, value) in [
        ("credentials.username", &credentials.username),
        ("credentials.password", &credentials.password),
        ("credentials.organisation", &credentials.organisation),
    ] {
        if value.is_empty() {
            errors.push(format!("{name} is empty"));
        }
    }

    finish(errors)
}

fn finish(errors: Vec<String>) -> Result<(), ConfigError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
