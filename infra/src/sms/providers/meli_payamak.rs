//! MeliPayamak gateway

use async_trait::async_trait;
use reqwest::Client;

use iran_sms_core::domain::value_objects::{PatternVariables, SendOutcome};
use iran_sms_core::errors::SmsError;
use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

use super::payamak_panel::PayamakPanel;

pub struct MeliPayamakProvider {
    panel: PayamakPanel,
}

impl MeliPayamakProvider {
    pub const NAME: &'static str = "meli_payamak";

    pub fn new(client: Client, credentials: &ProviderCredentials) -> Self {
        Self {
            panel: PayamakPanel::new(Self::NAME, client, credentials),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.panel.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Provider for MeliPayamakProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_sender(&self) -> &str {
        &self.panel.from
    }

    async fn send_otp(&self, _phone: &str, _message: &str, _from: &str) -> Result<SendOutcome, SmsError> {
        Err(self.panel.unsupported_otp())
    }

    async fn send_pattern(
        &self,
        phones: &[String],
        code: &str,
        variables: &PatternVariables,
        _from: &str,
    ) -> Result<SendOutcome, SmsError> {
        self.panel.send_pattern(phones, code, variables).await
    }

    async fn send_text(&self, phones: &[String], message: &str, from: &str) -> Result<SendOutcome, SmsError> {
        self.panel.send_text(phones, message, from).await
    }
}
