//! Which sent messages get persisted

use std::collections::BTreeSet;

use crate::domain::value_objects::MessageType;

/// Send status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogStatus {
    Successful,
    Failed,
}

impl LogStatus {
    pub fn from_successful(successful: bool) -> Self {
        if successful {
            LogStatus::Successful
        } else {
            LogStatus::Failed
        }
    }
}

/// Per-driver logging filter
///
/// Logging is off until a type is enabled. Both statuses are logged unless
/// narrowed with `log_successful` or `log_failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPolicy {
    types: Option<BTreeSet<MessageType>>,
    statuses: BTreeSet<LogStatus>,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            types: None,
            statuses: [LogStatus::Successful, LogStatus::Failed].into_iter().collect(),
        }
    }
}

impl LogPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable every type, or none
    pub fn log(&mut self, enabled: bool) {
        self.types = Some(if enabled {
            MessageType::ALL.into_iter().collect()
        } else {
            BTreeSet::new()
        });
    }

    /// Add or remove a single type
    ///
    /// Removing from an unset filter starts from every type; adding starts
    /// from none.
    pub fn log_type(&mut self, message_type: MessageType, enabled: bool) {
        let types = self.types.get_or_insert_with(|| {
            if enabled {
                BTreeSet::new()
            } else {
                MessageType::ALL.into_iter().collect()
            }
        });
        if enabled {
            types.insert(message_type);
        } else {
            types.remove(&message_type);
        }
    }

    /// Keep only successful sends; enables every type if none was chosen
    pub fn log_successful(&mut self) {
        self.narrow_status(LogStatus::Successful);
    }

    /// Keep only failed sends; enables every type if none was chosen
    pub fn log_failed(&mut self) {
        self.narrow_status(LogStatus::Failed);
    }

    pub fn should_log(&self, message_type: MessageType, successful: bool) -> bool {
        let Some(types) = &self.types else {
            return false;
        };

        types.contains(&message_type) && self.statuses.contains(&LogStatus::from_successful(successful))
    }

    pub fn is_enabled(&self) -> bool {
        self.types.as_ref().is_some_and(|types| !types.is_empty())
    }

    pub fn types(&self) -> Option<&BTreeSet<MessageType>> {
        self.types.as_ref()
    }

    pub fn statuses(&self) -> &BTreeSet<LogStatus> {
        &self.statuses
    }

    fn narrow_status(&mut self, status: LogStatus) {
        if self.types.is_none() {
            self.log(true);
        }
        self.statuses = [status].into_iter().collect();
    }
}
