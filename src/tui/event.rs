//! Event handling for the TUI.

use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tracing::debug;

use crate::models::Position;
use crate::performance::PositionClient;
use crate::simulation::QuoteSimulator;

use super::app::App;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// New quote text and the time stamp shown next to it.
    Quote { text: String, time: String },
    /// Result of the position lookup.
    PositionLoaded(Option<Position>),
    /// The position lookup failed.
    PositionFailed(String),
    /// Request to quit the application.
    Quit,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Spawns the simulated quote feed.
pub fn spawn_quote_feed(tx: mpsc::UnboundedSender<Message>, mut simulator: QuoteSimulator, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            let quote = simulator.next_tick(Local::now().naive_local());
            if tx
                .send(Message::Quote {
                    text: quote.text,
                    time: quote.time,
                })
                .is_err()
            {
                break;
            }
        }
    });
}

/// Spawns a one-shot lookup of the position held in `isin`.
pub fn spawn_position_loader(
    tx: mpsc::UnboundedSender<Message>,
    client: PositionClient,
    customer_id: String,
    isin: String,
) {
    tokio::spawn(async move {
        let message = match client.find_position(&customer_id, &isin).await {
            Ok(position) => Message::PositionLoaded(position),
            Err(e) => Message::PositionFailed(e.to_string()),
        };
        let _ = tx.send(message);
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message, now: NaiveDateTime) {
    match message {
        Message::Input(event) => handle_input(app, event, now),
        Message::Quote { text, time } => app.apply_quote(&text, &time, now),
        Message::PositionLoaded(position) => {
            if position.is_none() {
                app.show_status("Keine Position im Depot");
            }
            app.set_position(position);
        }
        Message::PositionFailed(error) => {
            app.show_status(format!("Positionen nicht abrufbar: {error}"));
        }
        Message::Quit => app.should_quit = true,
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event, now: NaiveDateTime) {
    match event {
        Event::Key(key) => handle_key(app, key, now),
        Event::Resize(_, _) => {}
        Event::Tick => {
            app.clear_stale_status();
            app.reconcile(now);
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent, now: NaiveDateTime) {
    debug!(code = ?key.code, "Key pressed");
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        KeyCode::Char('f') => app.toggle_fix_mode(now),
        KeyCode::Enter | KeyCode::Char(' ') => app.click_selected(now),

        // Selection
        KeyCode::Char('h') | KeyCode::Left => app.move_selection(-1, 0),
        KeyCode::Char('l') | KeyCode::Right => app.move_selection(1, 0),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(0, -1),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(0, 1),

        // Settings
        KeyCode::Char('a') => app.toggle_auto_confirm(now),
        KeyCode::Char('m') => app.toggle_offset_mode(now),
        KeyCode::Char('<') => app.step_offsets(false, now),
        KeyCode::Char('>') => app.step_offsets(true, now),
        KeyCode::Char('c') => app.cycle_button_count(now),

        // Limit adjuster
        KeyCode::Char('+') => app.adjust_limit(true),
        KeyCode::Char('-') => app.adjust_limit(false),
        KeyCode::Char('n') => app.cycle_nudge(),

        _ => {}
    }
}
