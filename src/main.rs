mod app;
mod classify;
mod config;
mod domain;
mod infrastructure;
mod ingest;
mod merge;
mod report;
mod users;

use anyhow::Result;
use infrastructure::{directories, logging};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::resolve_paths(&config)?;
    logging::init_tracing(&config, &paths)?;

    let app = app::AuditApp::new(config, paths);
    app.run()
}
