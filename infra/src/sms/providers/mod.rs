//! Built-in gateway adapters
//!
//! Each adapter maps the three message kinds onto one vendor API and parses
//! the vendor's verdict into a `SendOutcome`.

pub mod amoot_sms;
pub mod asanak;
pub mod fara_payamak;
pub mod faraz_sms;
pub mod ghasedak;
pub mod kavenegar;
pub mod limo_sms;
pub mod meli_payamak;
pub mod payam_resan;
pub(crate) mod payamak_panel;
pub mod raygan_sms;
pub mod sahar_sms;
pub mod sms_ir;
pub mod web_one;

use std::sync::Arc;

use reqwest::Client;

use iran_sms_core::services::Provider;
use iran_sms_shared::config::ProviderCredentials;

pub use amoot_sms::AmootSmsProvider;
pub use asanak::AsanakProvider;
pub use fara_payamak::FaraPayamakProvider;
pub use faraz_sms::FarazSmsProvider;
pub use ghasedak::GhasedakProvider;
pub use kavenegar::KavenegarProvider;
pub use limo_sms::LimoSmsProvider;
pub use meli_payamak::MeliPayamakProvider;
pub use payam_resan::PayamResanProvider;
pub use raygan_sms::RayganSmsProvider;
pub use sahar_sms::SaharSmsProvider;
pub use sms_ir::SmsIrProvider;
pub use web_one::WebOneProvider;

/// Build the built-in adapter registered under `name`
///
/// Returns `None` for names that are not built in.
pub fn create_provider(
    name: &str,
    client: Client,
    credentials: &ProviderCredentials,
) -> Option<Arc<dyn Provider>> {
    let provider: Arc<dyn Provider> = match name {
        SmsIrProvider::NAME => Arc::new(SmsIrProvider::new(client, credentials)),
        MeliPayamakProvider::NAME => Arc::new(MeliPayamakProvider::new(client, credentials)),
        PayamResanProvider::NAME => Arc::new(PayamResanProvider::new(client, credentials)),
        KavenegarProvider::NAME => Arc::new(KavenegarProvider::new(client, credentials)),
        FarazSmsProvider::NAME => Arc::new(FarazSmsProvider::new(client, credentials)),
        RayganSmsProvider::NAME => Arc::new(RayganSmsProvider::new(client, credentials)),
        WebOneProvider::NAME => Arc::new(WebOneProvider::new(client, credentials)),
        AmootSmsProvider::NAME => Arc::new(AmootSmsProvider::new(client, credentials)),
        FaraPayamakProvider::NAME => Arc::new(FaraPayamakProvider::new(client, credentials)),
        GhasedakProvider::NAME => Arc::new(GhasedakProvider::new(client, credentials)),
        LimoSmsProvider::NAME => Arc::new(LimoSmsProvider::new(client, credentials)),
        AsanakProvider::NAME => Arc::new(AsanakProvider::new(client, credentials)),
        SaharSmsProvider::NAME => Arc::new(SaharSmsProvider::new(client, credentials)),
        _ => return None,
    };
    Some(provider)
}

/// Whether `name` is one of the built-in adapters
pub fn is_builtin(name: &str) -> bool {
    iran_sms_shared::config::PROVIDER_NAMES.contains(&name)
}
