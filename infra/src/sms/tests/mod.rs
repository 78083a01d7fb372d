//! Adapter, fake and manager tests
//!
//! Adapters run against a `wiremock` server standing in for the gateway.

mod asanak_tests;
mod faraz_sms_tests;
mod limo_sms_tests;
mod payamak_panel_tests;
mod sms_ir_tests;
mod web_one_tests;

use iran_sms_shared::config::ProviderCredentials;

pub(super) fn client() -> reqwest::Client {
    reqwest::Client::new()
}

pub(super) fn phones(list: &[&str]) -> Vec<String> {
    list.iter().map(|phone| phone.to_string()).collect()
}

pub(super) fn token_credentials() -> ProviderCredentials {
    ProviderCredentials::new().with_token("test-token").with_from("3000")
}

pub(super) fn login_credentials() -> ProviderCredentials {
    ProviderCredentials::new()
        .with_username("user")
        .with_password("secret")
        .with_from("3000")
}

/// Address nothing listens on
pub(super) const UNREACHABLE: &str = "http://127.0.0.1:1";
