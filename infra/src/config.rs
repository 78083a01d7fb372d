//! Configuration loading for binaries and services embedding the drivers
//!
//! Sources, later ones winning:
//! 1. `.env` (via dotenvy, if present)
//! 2. an optional TOML file with `default` and `providers.<name>.<field>` keys
//! 3. `IRAN_SMS__*` environment variables, e.g. `IRAN_SMS__PROVIDERS__SMS_IR__TOKEN`
//!
//! The flat `SMS_*` variables read by [`SmsConfig::from_env`] fill in whatever
//! the layered sources leave unset.

use ::config::{Config, Environment, File};
use std::path::Path;

pub use iran_sms_shared::config::{
    DatabaseConfig, LogFormat, LoggingConfig, ProviderCredentials, SmsConfig,
};

use crate::InfrastructureError;

const ENV_PREFIX: &str = "IRAN_SMS";
const ENV_SEPARATOR: &str = "__";

/// Load the SMS configuration from `path` and the environment
pub fn load_sms_config(path: Option<&Path>) -> Result<SmsConfig, InfrastructureError> {
    dotenvy::dotenv().ok();

    let mut builder = Config::builder();
    if let Some(path) = path {
        if !path.exists() {
            return Err(InfrastructureError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR),
    );

    let layered: SmsConfig = builder
        .build()
        .and_then(|config| config.try_deserialize())
        .map_err(|e| InfrastructureError::Config(format!("Invalid SMS configuration: {}", e)))?;

    Ok(merge(layered, SmsConfig::from_env()))
}

/// Fill the gaps of `primary` from `fallback`
fn merge(mut primary: SmsConfig, fallback: SmsConfig) -> SmsConfig {
    if primary.default.is_empty() {
        primary.default = fallback.default;
    }
    for (name, credentials) in fallback.providers {
        primary.providers.entry(name).or_insert(credentials);
    }
    primary
}
