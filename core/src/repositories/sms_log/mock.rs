//! Mock implementation of SmsLogRepository for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

use super::SmsLogRepository;
use crate::domain::entities::SmsLog;
use crate::errors::SmsError;

/// In-memory SmsLogRepository for tests
#[derive(Clone, Default)]
pub struct MockSmsLogRepository {
    logs: Arc<Mutex<Vec<SmsLog>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockSmsLogRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether operations should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        *lock(&self.should_fail) = should_fail;
    }

    /// Get all stored logs for testing
    pub fn get_all_logs(&self) -> Vec<SmsLog> {
        lock(&self.logs).clone()
    }

    /// Insert a record directly, bypassing the failure switch
    pub fn insert(&self, log: SmsLog) {
        lock(&self.logs).push(log);
    }

    /// Clear all logs
    pub fn clear(&self) {
        lock(&self.logs).clear();
    }

    fn check_failure(&self) -> Result<(), SmsError> {
        if *lock(&self.should_fail) {
            return Err(SmsError::Storage("Mock repository error".to_string()));
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl SmsLogRepository for MockSmsLogRepository {
    async fn create(&self, log: &SmsLog) -> Result<(), SmsError> {
        self.check_failure()?;
        lock(&self.logs).push(log.clone());
        Ok(())
    }

    async fn prune_older_than(&self, days: i64) -> Result<u64, SmsError> {
        self.check_failure()?;

        let now = Utc::now();
        let mut logs = lock(&self.logs);
        let before = logs.len();
        logs.retain(|log| !log.is_older_than(days, now));
        Ok((before - logs.len()) as u64)
    }
}
