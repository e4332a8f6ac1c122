//! Terminal setup and teardown utilities.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{LimitpadError, Result};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode and switches to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if stdout is not a TTY or terminal initialization fails.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(LimitpadError::Io(
            "the button panel needs an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode().map_err(|e| LimitpadError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        LimitpadError::Io(format!("failed to enter alternate screen: {e}"))
    })?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| {
        let _ = disable_raw_mode();
        LimitpadError::Io(format!("failed to create terminal: {e}"))
    })
}

/// Disables raw mode and returns to the main screen buffer.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| LimitpadError::Io(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| LimitpadError::Io(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| LimitpadError::Io(e.to_string()))?;
    Ok(())
}
