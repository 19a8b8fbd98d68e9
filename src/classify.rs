use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{
    AuditRecord, Bucket, EmailPolicy, Severity, SuppressionEntry, SuppressionType, UserProfile,
};

/// Every record in this report comes from the same provider export.
pub const SUPPRESSION_SOURCE: &str = "sendgrid";

static HIGH_SEVERITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^550|does not exist").expect("valid high severity regex"));
static CRITICAL_SEVERITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)spam").expect("valid critical severity regex"));

/// Derives severity from the free-text suppression reason.
///
/// The high check runs before the critical one, so a reason like
/// "550 flagged as spam" stays high.
pub fn severity_from_reason(reason: Option<&str>) -> Severity {
    let Some(reason) = reason else {
        return Severity::Low;
    };
    if HIGH_SEVERITY.is_match(reason) {
        return Severity::High;
    }
    if CRITICAL_SEVERITY.is_match(reason) {
        return Severity::Critical;
    }
    Severity::Low
}

/// The bucket decision table. The stub user directory currently reports
/// `has_logged_in = false` for everyone, but the logged-in branches are kept
/// so real login data can be joined in later without touching this table.
pub fn determine_bucket(suppression_type: SuppressionType, has_logged_in: bool) -> Bucket {
    match (suppression_type, has_logged_in) {
        (SuppressionType::Spam, true) => Bucket::A,
        (SuppressionType::Spam, false) => Bucket::B,
        (SuppressionType::Invalid, _) => Bucket::D,
        (SuppressionType::Bounce, false) => Bucket::C,
        (SuppressionType::Bounce, true) => Bucket::A,
        (SuppressionType::Block, _) => Bucket::E,
    }
}

pub fn email_policy(suppression_type: SuppressionType) -> EmailPolicy {
    match suppression_type {
        SuppressionType::Spam | SuppressionType::Invalid => EmailPolicy::FullyBlocked,
        SuppressionType::Block | SuppressionType::Bounce => EmailPolicy::MarketingDisabled,
    }
}

/// Enriches a merged entry with its user profile and every derived field.
/// This is the only place a record picks up classification data; afterwards
/// records are read-only.
pub fn classify(entry: SuppressionEntry, profile: UserProfile) -> AuditRecord {
    let bucket = determine_bucket(entry.suppression_type, profile.has_logged_in);
    let severity = severity_from_reason(entry.reason.as_deref());
    AuditRecord {
        email: entry.email,
        suppression_type: entry.suppression_type,
        reason: entry.reason,
        user_id: profile.user_id,
        role: profile.role,
        last_login: profile.last_login,
        has_logged_in: profile.has_logged_in,
        login_allowed: profile.login_allowed,
        suppression_source: SUPPRESSION_SOURCE,
        bucket,
        severity,
        email_allowed: email_policy(entry.suppression_type),
        cleanup_candidate: matches!(bucket, Bucket::C | Bucket::D),
        recommended_action: bucket.recommended_action(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceRow;
    use crate::merge::merge_sources;
    use crate::users::{PlaceholderDirectory, UserDirectory};

    #[test]
    fn severity_follows_reason_patterns() {
        assert_eq!(severity_from_reason(Some("550 No such user")), Severity::High);
        assert_eq!(
            severity_from_reason(Some("Mailbox does not exist")),
            Severity::High
        );
        assert_eq!(
            severity_from_reason(Some("marked as SPAM")),
            Severity::Critical
        );
        assert_eq!(severity_from_reason(Some("unknown")), Severity::Low);
        assert_eq!(severity_from_reason(None), Severity::Low);
    }

    #[test]
    fn high_severity_wins_over_critical() {
        assert_eq!(
            severity_from_reason(Some("550 flagged as spam")),
            Severity::High
        );
    }

    #[test]
    fn severity_ignores_550_in_the_middle() {
        assert_eq!(severity_from_reason(Some("error 550 later")), Severity::Low);
    }

    #[test]
    fn bucket_decision_table() {
        assert_eq!(determine_bucket(SuppressionType::Spam, true), Bucket::A);
        assert_eq!(determine_bucket(SuppressionType::Spam, false), Bucket::B);
        assert_eq!(determine_bucket(SuppressionType::Invalid, true), Bucket::D);
        assert_eq!(determine_bucket(SuppressionType::Invalid, false), Bucket::D);
        assert_eq!(determine_bucket(SuppressionType::Bounce, false), Bucket::C);
        assert_eq!(determine_bucket(SuppressionType::Bounce, true), Bucket::A);
        assert_eq!(determine_bucket(SuppressionType::Block, true), Bucket::E);
        assert_eq!(determine_bucket(SuppressionType::Block, false), Bucket::E);
    }

    #[test]
    fn email_policy_blocks_spam_and_invalid_fully() {
        assert_eq!(email_policy(SuppressionType::Spam), EmailPolicy::FullyBlocked);
        assert_eq!(
            email_policy(SuppressionType::Invalid),
            EmailPolicy::FullyBlocked
        );
        assert_eq!(
            email_policy(SuppressionType::Bounce),
            EmailPolicy::MarketingDisabled
        );
        assert_eq!(
            email_policy(SuppressionType::Block),
            EmailPolicy::MarketingDisabled
        );
    }

    #[test]
    fn cleanup_candidate_only_for_buckets_c_and_d() {
        let directory = PlaceholderDirectory;
        for (index, suppression_type) in [
            SuppressionType::Block,
            SuppressionType::Bounce,
            SuppressionType::Invalid,
            SuppressionType::Spam,
        ]
        .into_iter()
        .enumerate()
        {
            let entry = SuppressionEntry {
                email: format!("user{index}@example.com"),
                suppression_type,
                reason: None,
            };
            let profile = directory.profile_for(index, &entry.email);
            let record = classify(entry, profile);
            assert_eq!(
                record.cleanup_candidate,
                matches!(record.bucket, Bucket::C | Bucket::D)
            );
        }
    }

    #[test]
    fn minimal_sample_sources_classify_to_b_d_c_e() {
        let row = |email: &str, reason: Option<&str>| SourceRow {
            email: Some(email.to_string()),
            reason: reason.map(str::to_string),
        };
        let merged = merge_sources(vec![
            (
                SuppressionType::Block,
                vec![row("blocked@example.com", Some("connection timed out"))],
            ),
            (
                SuppressionType::Bounce,
                vec![row("bounced@example.com", Some("550 no such user"))],
            ),
            (
                SuppressionType::Invalid,
                vec![row("junk@example", Some("does not exist"))],
            ),
            (
                SuppressionType::Spam,
                vec![row("reporter@example.com", Some("marked as spam"))],
            ),
        ]);
        assert_eq!(merged.len(), 4);

        let directory = PlaceholderDirectory;
        let records: Vec<_> = merged
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let profile = directory.profile_for(index, &entry.email);
                classify(entry, profile)
            })
            .collect();

        let buckets: Vec<_> = records.iter().map(|record| record.bucket).collect();
        assert_eq!(buckets, vec![Bucket::E, Bucket::C, Bucket::D, Bucket::B]);

        let safe_cleanup = records
            .iter()
            .filter(|record| record.bucket == Bucket::D)
            .count();
        assert_eq!(safe_cleanup, 1);

        assert_eq!(records[0].user_id, "U1000");
        assert_eq!(records[3].user_id, "U1003");
    }
}
