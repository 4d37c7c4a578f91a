//! Twinfield client configuration.
//!
//! TOML-based configuration with an environment overlay and validation.
//! All sections use defaults so partial configs work out of the box.
//!
//! ```rust,no_run
//! use twinfield_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_env, apply_env_from};
pub use schema::{
    CredentialsConfig, EndpointConfig, LogLevel, LoggingConfig, TimeoutConfig, TwinfieldConfig,
    DEFAULT_LOGIN_URL,
};
pub use validation::{validate, validate_credentials};

use std::path::Path;

use twinfield_common::ConfigError;

/// Load config from the platform default path, overlay the environment
/// and validate the result. Validation runs here only, after the overlay.
pub fn load_config() -> Result<TwinfieldConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    finish_loading(config)
}

/// Same as [`load_config`] but reads an explicit file.
pub fn load_config_from(path: &Path) -> Result<TwinfieldConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    finish_loading(config)
}

fn finish_loading(mut config: TwinfieldConfig) -> Result<TwinfieldConfig, ConfigError> {
    apply_env(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to pretty-printed JSON with the password masked.
pub fn config_to_json(config: &TwinfieldConfig) -> String {
    let mut redacted = config.clone();
    if !redacted.credentials.password.is_empty() {
        redacted.credentials.password = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
