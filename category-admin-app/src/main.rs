//! Category Admin command-line entry point
//!
//! Reads `CATEGORY_API_URL`, loads the category list once and prints it as
//! a tab-separated table. Logs go to stderr (`RUST_LOG`, default `info`).
//! A failed list fetch is logged and an empty table is printed.

use anyhow::{Context, Result};
use category_admin_app::{init_logging, render_table, AppConfig, AppStateBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let state = AppStateBuilder::new()
        .config(config)
        .build()
        .context("failed to initialize application")?;

    let list = state.load_list().await;
    tracing::debug!(rows = list.rows().len(), "Rendering category list");
    print!("{}", render_table(list.state()));

    Ok(())
}
