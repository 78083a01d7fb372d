//! SMS log repository module.

mod r#trait;
pub use r#trait::SmsLogRepository;

mod noop;
pub use noop::NoOpSmsLogRepository;

mod mock;
pub use mock::MockSmsLogRepository;
