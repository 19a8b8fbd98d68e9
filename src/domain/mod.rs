pub mod record;
pub mod types;

pub use record::{AuditRecord, SourceRow, SuppressionEntry, UserProfile};
pub use types::{Bucket, EmailPolicy, Severity, SuppressionType};
