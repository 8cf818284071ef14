//! rdash - a terminal dashboard for scheduled routines.
//!
//! This is the main binary that loads configuration, sets up logging and
//! launches the TUI application.

mod logging;

use std::sync::Arc;

use anyhow::Context;
use rdash_client::HttpClient;
use rdash_config::Config;
use rdash_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    // Logging is best effort; the dashboard runs without it
    match config.log_path() {
        Ok(path) => {
            if let Err(err) = logging::init_logging(&path) {
                eprintln!("rdash: logging disabled: {err:#}");
            }
        }
        Err(err) => eprintln!("rdash: logging disabled: {err}"),
    }

    info!(
        server = %config.server_address,
        interval_ms = config.polling.interval_ms,
        "starting rdash"
    );

    let api = HttpClient::new(&config.server_address, config.request_timeout())?;

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(Arc::new(api), &config);

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
