use std::{
    fs::File,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::domain::{SourceRow, SuppressionType};

/// The four provider exports, in merge precedence order.
pub const SOURCE_FILES: [(SuppressionType, &str); 4] = [
    (SuppressionType::Block, "suppression_blocks.csv"),
    (SuppressionType::Bounce, "suppression_bounces.csv"),
    (SuppressionType::Invalid, "suppression_invalid_emails.csv"),
    (SuppressionType::Spam, "suppression_spam_reports.csv"),
];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing required column `{column}` in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },
    #[error("malformed CSV data in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads all four suppression exports from the data directory. Any missing
/// file, unreadable CSV, or export without an `email` column is fatal; there
/// is no partial report.
pub fn load_sources(data_dir: &Path) -> Result<Vec<(SuppressionType, Vec<SourceRow>)>, IngestError> {
    let mut sources = Vec::with_capacity(SOURCE_FILES.len());
    for (suppression_type, filename) in SOURCE_FILES {
        let path = data_dir.join(filename);
        let rows = load_source(&path)?;
        debug!(target: "ingest", source = %suppression_type, rows = rows.len(), path = %path.display(), "loaded suppression export");
        sources.push((suppression_type, rows));
    }
    Ok(sources)
}

fn load_source(path: &Path) -> Result<Vec<SourceRow>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    if !headers.iter().any(|header| header == "email") {
        return Err(IngestError::MissingColumn {
            column: "email",
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<SourceRow>() {
        let row = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
