//! Terminal front end: the limit button panel next to an order ticket.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

use chrono::Local;
use tokio::sync::mpsc;

use crate::{LimitpadError, Result};

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;

/// Draws and processes messages until the app asks to quit or every
/// sender is gone.
///
/// # Errors
///
/// Returns [`LimitpadError::Io`] if drawing to the terminal fails.
pub async fn run(terminal: &mut Tui, app: &mut App, rx: &mut mpsc::UnboundedReceiver<Message>) -> Result<()> {
    app.reconcile(Local::now().naive_local());
    draw(terminal, app)?;

    while let Some(message) = rx.recv().await {
        event::update(app, message, Local::now().naive_local());
        if app.should_quit {
            break;
        }
        draw(terminal, app)?;
    }
    Ok(())
}

fn draw(terminal: &mut Tui, app: &App) -> Result<()> {
    terminal
        .draw(|frame| render(frame, app))
        .map_err(|e| LimitpadError::Io(format!("failed to draw: {e}")))?;
    Ok(())
}
