use std::fs;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    classify,
    config::AppConfig,
    domain::{AuditRecord, SuppressionEntry},
    infrastructure::directories::ResolvedPaths,
    ingest, merge, report,
    users::{PlaceholderDirectory, UserDirectory},
};

pub struct AuditApp {
    config: AppConfig,
    paths: ResolvedPaths,
}

impl AuditApp {
    pub fn new(config: AppConfig, paths: ResolvedPaths) -> Self {
        Self { config, paths }
    }

    /// Runs the whole batch: ingest, merge, classify, render, write, open.
    pub fn run(&self) -> Result<()> {
        let sources = ingest::load_sources(&self.paths.data_dir)
            .with_context(|| format!("failed to ingest from {}", self.paths.data_dir.display()))?;
        let total_rows: usize = sources.iter().map(|(_, rows)| rows.len()).sum();

        let entries = merge::merge_sources(sources);
        info!(
            target: "merge",
            rows = total_rows,
            unique = entries.len(),
            "merged suppression exports"
        );

        let records = classify_entries(entries);
        for (bucket, count) in report::bucket_counts(&records) {
            info!(target: "classify", bucket = %bucket, count, "bucket total");
        }
        info!(
            target: "classify",
            safe_cleanup = report::safe_cleanup_count(&records),
            "classification complete"
        );

        let html = report::render(&records)?;
        fs::write(&self.paths.report_path, html).with_context(|| {
            format!("failed to write report to {}", self.paths.report_path.display())
        })?;
        info!(target: "report", path = %self.paths.report_path.display(), "report generated");

        if self.config.report.open_after_write {
            if let Err(err) = opener::open(&self.paths.report_path) {
                warn!(target: "report", error = %err, "could not open report in default viewer");
            }
        }
        Ok(())
    }
}

fn classify_entries(entries: Vec<SuppressionEntry>) -> Vec<AuditRecord> {
    let directory = PlaceholderDirectory;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let profile = directory.profile_for(index, &entry.email);
            classify::classify(entry, profile)
        })
        .collect()
}
