//! Raw-mode terminal lifecycle.
//!
//! [`TerminalGuard::enter`] claims raw mode and the alternate screen and hands
//! back the ratatui handle drawn against it; dropping the guard returns the
//! user's shell. A panic hook restores the screen first so the panic message
//! never prints onto the discarded alternate buffer.
use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> Result<(Self, Tui)> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave();
            previous(info);
        }));

        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((Self { _private: () }, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = leave() {
            tracing::warn!(%error, "failed to restore terminal");
        }
    }
}

/// Shared by [`Drop`] and the panic hook; safe to run more than once, and
/// a no-op for raw mode when it was never enabled.
fn leave() -> Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_without_raw_mode_is_a_no_op() {
        // The panic hook may fire before any terminal was set up.
        assert!(leave().is_ok());
        assert!(leave().is_ok());
    }
}
