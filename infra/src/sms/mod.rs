//! SMS gateways
//!
//! - `providers`: one adapter per Iranian gateway
//! - `fake`: in-memory provider for tests
//! - `manager`: resolves driver names to fresh `Driver`s
//! - `http`, `json`, `rules`, `time`: helpers shared by the adapters

pub mod fake;
pub mod http;
pub mod json;
pub mod manager;
pub mod providers;
pub mod rules;
pub mod time;

#[cfg(test)]
mod tests;

pub use fake::{FakeProvider, SentMessage};
pub use http::{build_client, HttpTransport, DEFAULT_TIMEOUT_SECS};
pub use manager::{failed_connection, failed_request, successful_request, ProviderCreator, SmsManager};
pub use providers::{
    create_provider, AmootSmsProvider, AsanakProvider, FaraPayamakProvider, FarazSmsProvider,
    GhasedakProvider, KavenegarProvider, LimoSmsProvider, MeliPayamakProvider, PayamResanProvider,
    RayganSmsProvider, SaharSmsProvider, SmsIrProvider, WebOneProvider,
};
