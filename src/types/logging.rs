use std::fmt;

use serde::{Deserialize, Serialize};

use super::policy::PolicyDocument;

/// Prefix of every access-log group name.
pub const LOG_GROUP_PREFIX: &str = "waf-logs-";

/// Preferred log retention, in days (five years).
pub const LOG_RETENTION_DAYS: u32 = 1825;

/// Desired access-logging configuration for a policy document.
///
/// The crate only names the destination and states the retention
/// preference; creating the log group and enforcing retention belong to
/// the provisioning layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    log_group: String,
    retention_days: u32,
}

impl LoggingConfig {
    /// Derive the logging configuration for a document:
    /// `waf-logs-{document name}`, retained for five years.
    #[must_use]
    pub fn for_document(document: &PolicyDocument) -> Self {
        Self {
            log_group: format!("{LOG_GROUP_PREFIX}{}", document.name()),
            retention_days: LOG_RETENTION_DAYS,
        }
    }

    #[must_use]
    pub fn log_group(&self) -> &str {
        &self.log_group
    }

    #[must_use]
    pub fn retention_days(&self) -> u32 {
        self.retention_days
    }
}

impl fmt::Display for LoggingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} days)", self.log_group, self.retention_days)
    }
}
