//! MySQL repository implementations

mod sms_log_repository_impl;

pub use sms_log_repository_impl::MySqlSmsLogRepository;
