//! Domain layer: message value objects and the SMS log entity

pub mod entities;
pub mod value_objects;

pub use entities::{LogContent, SmsLog};
pub use value_objects::{
    ErrorCode, Message, MessageType, MockResponse, PatternVariables, ProviderResponse,
    Recipients, SendOutcome,
};
