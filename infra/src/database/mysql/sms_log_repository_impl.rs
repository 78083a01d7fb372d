//! MySQL implementation of the SmsLogRepository trait.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::MySqlPool;
use tracing::debug;

use iran_sms_core::domain::entities::SmsLog;
use iran_sms_core::errors::SmsError;
use iran_sms_core::repositories::SmsLogRepository;

/// Stores SMS logs in the `sms_logs` table
///
/// `to` and `content` are kept as JSON columns.
#[derive(Clone)]
pub struct MySqlSmsLogRepository {
    pool: MySqlPool,
}

impl MySqlSmsLogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SmsLogRepository for MySqlSmsLogRepository {
    async fn create(&self, log: &SmsLog) -> Result<(), SmsError> {
        let query = r#"
            INSERT INTO sms_logs (
                id, type, driver, `from`, `to`, content,
                is_successful, error, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let to = serde_json::to_string(&log.to)
            .map_err(|e| SmsError::Storage(format!("Failed to serialize recipients: {}", e)))?;
        let content = serde_json::to_string(&log.content)
            .map_err(|e| SmsError::Storage(format!("Failed to serialize content: {}", e)))?;

        sqlx::query(query)
            .bind(log.id.to_string())
            .bind(log.message_type.as_str())
            .bind(&log.driver)
            .bind(&log.from)
            .bind(to)
            .bind(content)
            .bind(log.is_successful)
            .bind(&log.error)
            .bind(log.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| SmsError::Storage(format!("Failed to create SMS log: {}", e)))?;

        debug!(id = %log.id, driver = %log.driver, "SMS log stored");
        Ok(())
    }

    async fn prune_older_than(&self, days: i64) -> Result<u64, SmsError> {
        let cutoff = Utc::now() - Duration::days(days);

        let result = sqlx::query("DELETE FROM sms_logs WHERE created_at < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| SmsError::Storage(format!("Failed to prune SMS logs: {}", e)))?;

        Ok(result.rows_affected())
    }
}
