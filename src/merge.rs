use std::collections::HashSet;

use crate::domain::{SourceRow, SuppressionEntry, SuppressionType};

/// Normalizes an email into its merge key: trimmed and lower-cased.
/// Returns `None` when nothing is left after trimming; such rows are dropped.
pub fn normalize_email(raw: &str) -> Option<String> {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Concatenates the tagged sources and deduplicates by normalized email.
///
/// The caller supplies sources in precedence order (block, bounce, invalid,
/// spam); the first occurrence of an email wins, so that order decides which
/// suppression type a multiply-listed address ends up with. Output preserves
/// first-seen order, which keeps the synthetic user ids stable across runs.
pub fn merge_sources(sources: Vec<(SuppressionType, Vec<SourceRow>)>) -> Vec<SuppressionEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (suppression_type, rows) in sources {
        for row in rows {
            let Some(email) = row.email.as_deref().and_then(normalize_email) else {
                continue;
            };
            if !seen.insert(email.clone()) {
                continue;
            }
            entries.push(SuppressionEntry {
                email,
                suppression_type,
                reason: clean_reason(row.reason),
            });
        }
    }
    entries
}

fn clean_reason(reason: Option<String>) -> Option<String> {
    reason.and_then(|value| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}
