use std::fs::File;
use std::sync::Mutex;

use limitpad::LimitpadError;
use limitpad::config::fetch_config;
use limitpad::performance::PositionClient;
use limitpad::simulation::QuoteSimulator;
use limitpad::tui::{self, App, event, restore_terminal, setup_terminal};
use tokio::sync::mpsc;
use tracing::info;

/// Milliseconds between UI ticks (latency badge refresh).
const TICK_INTERVAL_MS: u64 = 1000;
/// Milliseconds between simulated quotes.
const QUOTE_INTERVAL_MS: u64 = 700;

#[tokio::main]
async fn main() -> Result<(), LimitpadError> {
    let app_config = fetch_config()?;

    // The terminal belongs to the TUI, so logs go to a file.
    let log_file = File::create(&app_config.log_file).map_err(|e| {
        LimitpadError::Io(format!("failed to create {}: {e}", app_config.log_file.display()))
    })?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let settings = app_config.load_settings()?;
    info!(
        mode = settings.offset_button_mode.as_str(),
        count = settings.offset_button_count,
        "Settings loaded"
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    event::spawn_quote_feed(
        tx.clone(),
        QuoteSimulator::new(settings.simulation.clone()),
        QUOTE_INTERVAL_MS,
    );
    if let Some((customer_id, isin)) = app_config.api.position_lookup() {
        let client = PositionClient::new(app_config.api.base_url.clone());
        event::spawn_position_loader(tx.clone(), client, customer_id.to_string(), isin.to_string());
    }
    drop(tx);

    let mut app = App::new(settings);
    let mut terminal = setup_terminal()?;
    let result = tui::run(&mut terminal, &mut app, &mut rx).await;
    restore_terminal(&mut terminal)?;

    info!(limits = app.controller.target().submissions(), "Shutting down");
    result
}
