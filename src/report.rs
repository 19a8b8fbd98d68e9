use anyhow::Result;
use askama::Template;
use chrono::Utc;

use crate::domain::{AuditRecord, Bucket};

/// Rendered in place of a last-login timestamp the stub directory never has.
pub const LAST_LOGIN_PLACEHOLDER: &str = "No login timestamp exists for the user";

/// Detail-table columns in their fixed order. The `#`/`$` suffixes are a
/// display convention that selects the header color; they carry no meaning
/// in the data model.
const COLUMNS: [Column; 14] = [
    Column::dollar("bucket$"),
    Column::hash("email#"),
    Column::hash("user_id#"),
    Column::hash("user_role#"),
    Column::dollar("has_logged_in$"),
    Column::hash("last_login#"),
    Column::dollar("suppression_source$"),
    Column::dollar("suppression_type$"),
    Column::hash("suppression_code_reason#"),
    Column::dollar("severity$"),
    Column::dollar("email_allowed$"),
    Column::hash("login_allowed#"),
    Column::dollar("cleanup_candidate$"),
    Column::dollar("recommended_action$"),
];

struct Column {
    name: &'static str,
    class: &'static str,
}

impl Column {
    const fn hash(name: &'static str) -> Self {
        Self { name, class: "hash" }
    }

    const fn dollar(name: &'static str) -> Self {
        Self {
            name,
            class: "dollar",
        }
    }
}

struct BucketCard {
    key: &'static str,
    count: usize,
    explainer: &'static str,
}

struct ReportRow {
    bucket: &'static str,
    cells: Vec<String>,
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate {
    cards: Vec<BucketCard>,
    safe_cleanup_count: usize,
    columns: &'static [Column],
    rows: Vec<ReportRow>,
    generated_at: String,
}

/// Count of records per bucket, in A–E order.
pub fn bucket_counts(records: &[AuditRecord]) -> Vec<(Bucket, usize)> {
    Bucket::ALL
        .into_iter()
        .map(|bucket| {
            let count = records
                .iter()
                .filter(|record| record.bucket == bucket)
                .count();
            (bucket, count)
        })
        .collect()
}

/// Bucket-D records are the ones safe to archive or soft delete.
pub fn safe_cleanup_count(records: &[AuditRecord]) -> usize {
    records
        .iter()
        .filter(|record| record.bucket == Bucket::D)
        .count()
}

/// Renders the classified records into the self-contained HTML document.
pub fn render(records: &[AuditRecord]) -> Result<String> {
    let cards = bucket_counts(records)
        .into_iter()
        .map(|(bucket, count)| BucketCard {
            key: bucket.as_str(),
            count,
            explainer: bucket.explainer(),
        })
        .collect();

    let template = ReportTemplate {
        cards,
        safe_cleanup_count: safe_cleanup_count(records),
        columns: &COLUMNS,
        rows: records.iter().map(detail_row).collect(),
        generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };
    Ok(template.render()?)
}

fn detail_row(record: &AuditRecord) -> ReportRow {
    let last_login = record.last_login.map_or_else(
        || LAST_LOGIN_PLACEHOLDER.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
    );
    ReportRow {
        bucket: record.bucket.as_str(),
        cells: vec![
            record.email.clone(),
            record.user_id.clone(),
            record.role.clone(),
            record.has_logged_in.to_string(),
            last_login,
            record.suppression_source.to_string(),
            record.suppression_type.to_string(),
            record.reason.clone().unwrap_or_default(),
            record.severity.to_string(),
            record.email_allowed.to_string(),
            record.login_allowed.to_string(),
            record.cleanup_candidate.to_string(),
            record.recommended_action.to_string(),
        ],
    }
}
