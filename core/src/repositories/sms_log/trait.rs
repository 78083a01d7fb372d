//! SMS log repository trait defining the interface for log persistence.

use async_trait::async_trait;

use crate::domain::entities::SmsLog;
use crate::errors::SmsError;

/// Repository trait for SmsLog persistence
///
/// Drivers call `create` right after a send whose type and status match their
/// log policy. Implementations serialize their own writes.
#[async_trait]
pub trait SmsLogRepository: Send + Sync {
    /// Persist a new log record
    ///
    /// # Returns
    /// * `Ok(())` on successful creation
    /// * `Err(SmsError::Storage)` if the write fails
    async fn create(&self, log: &SmsLog) -> Result<(), SmsError>;

    /// Delete records created more than `days` days ago
    ///
    /// # Returns
    /// * Number of deleted records
    async fn prune_older_than(&self, days: i64) -> Result<u64, SmsError>;
}
