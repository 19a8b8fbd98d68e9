pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, LoggingConfig, ReportConfig};
pub use loader::load_config;
