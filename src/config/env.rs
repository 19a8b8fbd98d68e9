use thiserror::Error;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub data_dir: String,
    pub output_dir: String,
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub filename: String,
    pub open_after_write: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
