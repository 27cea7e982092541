//! Raw-mode screen used by the interactive binary.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::board::Board;
use crate::renderer;

static RESTORE_ON_PANIC: Once = Once::new();

/// Alternate screen in raw mode that renders boards.
///
/// The terminal is handed back when the screen is dropped, and also when any
/// thread panics while it is active.
pub struct TerminalScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalScreen {
    pub fn enter() -> io::Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let report = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                restore();
                report(info);
            }));
        });

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .map(|terminal| Self { terminal })
            .inspect_err(|_| restore())
    }

    /// Draws one frame for `board`.
    pub fn draw(&mut self, board: &Board) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, board))
            .map(|_| ())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        restore();
    }
}

/// Leaves raw mode and the alternate screen, ignoring failures.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
