//! No-op implementation of SmsLogRepository for when logs are not kept

use async_trait::async_trait;

use super::SmsLogRepository;
use crate::domain::entities::SmsLog;
use crate::errors::SmsError;

/// Accepts every record and stores nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpSmsLogRepository;

impl NoOpSmsLogRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SmsLogRepository for NoOpSmsLogRepository {
    async fn create(&self, _log: &SmsLog) -> Result<(), SmsError> {
        Ok(())
    }

    async fn prune_older_than(&self, _days: i64) -> Result<u64, SmsError> {
        Ok(0)
    }
}
