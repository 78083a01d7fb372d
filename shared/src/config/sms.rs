//! SMS driver configuration
//!
//! Mirrors the layout every driver expects: a default driver name plus a
//! credentials block per provider. Adapters pick the fields they need.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Names of every built-in provider driver
pub const PROVIDER_NAMES: [&str; 13] = [
    "sms_ir",
    "meli_payamak",
    "payam_resan",
    "kavenegar",
    "faraz_sms",
    "raygan_sms",
    "web_one",
    "amoot_sms",
    "fara_payamak",
    "ghasedak",
    "limo_sms",
    "asanak",
    "sahar_sms",
];

/// Credentials for a single provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderCredentials {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// API key / access token
    #[serde(default)]
    pub token: String,

    /// Default sender line number
    #[serde(default)]
    pub from: String,
}

impl ProviderCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// True when no field has been provided
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
            && self.password.is_empty()
            && self.token.is_empty()
            && self.from.is_empty()
    }

    fn from_lookup<F>(lookup: &F, prefix: &str) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |field: &str| lookup(&format!("{}{}", prefix, field)).unwrap_or_default();

        Self {
            username: read("USERNAME"),
            password: read("PASSWORD"),
            token: read("TOKEN"),
            from: read("FROM"),
        }
    }

    /// Fill empty fields from `other`
    fn merge_missing(&mut self, other: &ProviderCredentials) {
        if self.username.is_empty() {
            self.username = other.username.clone();
        }
        if self.password.is_empty() {
            self.password = other.password.clone();
        }
        if self.token.is_empty() {
            self.token = other.token.clone();
        }
        if self.from.is_empty() {
            self.from = other.from.clone();
        }
    }
}

/// SMS configuration: default driver and provider credentials
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Driver used when none is requested explicitly
    #[serde(default)]
    pub default: String,

    /// Credentials keyed by driver name
    #[serde(default)]
    pub providers: HashMap<String, ProviderCredentials>,
}

impl SmsConfig {
    /// Create a configuration with the given default driver
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            providers: HashMap::new(),
        }
    }

    /// Register credentials for a provider
    pub fn with_provider(mut self, name: impl Into<String>, credentials: ProviderCredentials) -> Self {
        self.providers.insert(name.into(), credentials);
        self
    }

    /// Credentials configured for `name`
    pub fn credentials(&self, name: &str) -> Option<&ProviderCredentials> {
        self.providers.get(name)
    }

    /// Create from environment variables
    ///
    /// `SMS_PROVIDER` selects the default driver. Each provider reads
    /// `SMS_<NAME>_USERNAME`, `_PASSWORD`, `_TOKEN` and `_FROM`; the unprefixed
    /// `SMS_USERNAME` family fills whatever the default driver left empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = lookup("SMS_PROVIDER").unwrap_or_default();
        let mut providers = HashMap::new();

        for name in PROVIDER_NAMES {
            let prefix = format!("SMS_{}_", name.to_uppercase());
            let credentials = ProviderCredentials::from_lookup(&lookup, &prefix);
            if !credentials.is_empty() {
                providers.insert(name.to_string(), credentials);
            }
        }

        let generic = ProviderCredentials::from_lookup(&lookup, "SMS_");
        if !default.is_empty() && !generic.is_empty() {
            providers
                .entry(default.clone())
                .or_insert_with(ProviderCredentials::default)
                .merge_missing(&generic);
        }

        Self { default, providers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_prefixed_providers() {
        let config = SmsConfig::from_lookup(lookup_from(&[
            ("SMS_PROVIDER", "kavenegar"),
            ("SMS_KAVENEGAR_TOKEN", "kave-token"),
            ("SMS_KAVENEGAR_FROM", "10004346"),
            ("SMS_SMS_IR_TOKEN", "smsir-token"),
        ]));

        assert_eq!(config.default, "kavenegar");
        assert_eq!(config.credentials("kavenegar").unwrap().token, "kave-token");
        assert_eq!(config.credentials("kavenegar").unwrap().from, "10004346");
        assert_eq!(config.credentials("sms_ir").unwrap().token, "smsir-token");
        assert!(config.credentials("ghasedak").is_none());
    }

    #[test]
    fn test_generic_variables_fill_default_driver() {
        let config = SmsConfig::from_lookup(lookup_from(&[
            ("SMS_PROVIDER", "meli_payamak"),
            ("SMS_USERNAME", "user"),
            ("SMS_PASSWORD", "secret"),
            ("SMS_MELI_PAYAMAK_FROM", "5000"),
        ]));

        let credentials = config.credentials("meli_payamak").unwrap();
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "secret");
        assert_eq!(credentials.from, "5000");
    }

    #[test]
    fn test_generic_variables_ignored_without_default() {
        let config = SmsConfig::from_lookup(lookup_from(&[("SMS_TOKEN", "orphan")]));

        assert!(config.default.is_empty());
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = SmsConfig::new("asanak")
            .with_provider("asanak", ProviderCredentials::new().with_username("u").with_password("p"));

        assert_eq!(config.credentials("asanak").unwrap().password, "p");
        assert!(!config.credentials("asanak").unwrap().is_empty());
    }
}
