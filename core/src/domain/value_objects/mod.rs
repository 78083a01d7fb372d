//! Value objects describing messages and send outcomes

pub mod message;
pub mod mock_response;
pub mod outcome;

pub use message::{Message, MessageType, PatternVariables, Recipients};
pub use mock_response::MockResponse;
pub use outcome::{ErrorCode, ProviderResponse, SendOutcome};
