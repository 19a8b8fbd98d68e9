use std::env;

use super::env::{AppConfig, ConfigError, DirectoryConfig, LoggingConfig, ReportConfig};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let directories = DirectoryConfig {
            data_dir: env::var("SUPPRESSION_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            output_dir: env::var("OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
            logs_dir: env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        };

        let report = ReportConfig {
            filename: env::var("REPORT_FILENAME")
                .unwrap_or_else(|_| "email_deliverability_report.html".to_string()),
            open_after_write: parse_bool("OPEN_REPORT", true)?,
        };

        Ok(Self {
            directories,
            logging,
            report,
        })
    }
}

fn parse_bool(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Err(_) => Ok(default),
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" => Ok(default),
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid(key, value)),
        },
    }
}
