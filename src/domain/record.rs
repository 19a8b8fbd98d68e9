use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::types::{Bucket, EmailPolicy, Severity, SuppressionType};

/// One row as it appears in a suppression export. Only the `email` column is
/// required; exports without a `reason` column read as absent reasons.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRow {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// A deduplicated suppression entry, keyed by normalized email.
#[derive(Debug, Clone)]
pub struct SuppressionEntry {
    pub email: String,
    pub suppression_type: SuppressionType,
    pub reason: Option<String>,
}

/// User data joined onto a suppression entry. Currently fabricated by the
/// placeholder directory; see `users::UserDirectory`.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub has_logged_in: bool,
    pub login_allowed: bool,
}

/// One fully classified row of the audit report.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub email: String,
    pub suppression_type: SuppressionType,
    pub reason: Option<String>,
    pub user_id: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub has_logged_in: bool,
    pub login_allowed: bool,
    pub suppression_source: &'static str,
    pub bucket: Bucket,
    pub severity: Severity,
    pub email_allowed: EmailPolicy,
    pub cleanup_candidate: bool,
    pub recommended_action: &'static str,
}
