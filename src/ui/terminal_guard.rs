//! Raw mode and the alternate screen for the lifetime of the UI.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Puts the terminal back on drop or on panic, whichever happens first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        if let Err(err) = enter_screen() {
            // Undo whatever part of the setup went through
            leave_screen();
            return Err(err);
        }

        let restored = Arc::new(AtomicBool::new(false));
        let hook_flag = Arc::clone(&restored);
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if claim(&hook_flag) {
                leave_screen();
            }
            previous(info);
        }));

        Ok(Self { restored })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if claim(&self.restored) {
            leave_screen();
        }
    }
}

fn enter_screen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        Clear(ClearType::All),
        Hide
    )
}

/// Best effort: the terminal may already be gone.
fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
}

/// True for the first caller only.
fn claim(restored: &AtomicBool) -> bool {
    !restored.swap(true, Ordering::SeqCst)
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let guard = TerminalGuard::enter()?;
    // On failure the guard drops here and restores the screen
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok((terminal, guard))
}
