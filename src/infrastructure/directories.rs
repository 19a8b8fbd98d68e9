use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::AppConfig;

#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub report_path: PathBuf,
}

/// Resolves the input/output/log locations before any work starts. The data
/// directory must already exist; the log and output directories are created,
/// and the output directory is probed for writability so a run fails before
/// parsing rather than after.
pub fn resolve_paths(config: &AppConfig) -> Result<ResolvedPaths> {
    let data_dir = PathBuf::from(&config.directories.data_dir);
    if !data_dir.is_dir() {
        bail!(
            "suppression data directory {} does not exist",
            data_dir.display()
        );
    }

    let logs_dir = ensure_dir(&config.directories.logs_dir)?;
    let output_dir = ensure_dir(&config.directories.output_dir)?;

    let probe_file = output_dir.join(".write-test");
    fs::write(&probe_file, b"ok")
        .with_context(|| format!("output directory {} is not writable", output_dir.display()))?;
    fs::remove_file(&probe_file)?;

    Ok(ResolvedPaths {
        data_dir: data_dir.canonicalize().unwrap_or(data_dir),
        logs_dir,
        report_path: output_dir.join(&config.report.filename),
    })
}

fn ensure_dir(path: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        fs::create_dir_all(&dir).with_context(|| format!("failed to create directory {}", path))?;
    }
    Ok(dir.canonicalize().unwrap_or(dir))
}
