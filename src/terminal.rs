use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Set while raw mode is on. Both the guard and the panic hook restore, and
/// only the first of them to run touches the terminal.
static ACQUIRED: AtomicBool = AtomicBool::new(false);

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Take over the terminal. Anything already switched on is undone if a
    /// later step fails.
    pub fn acquire() -> io::Result<(Self, Term)> {
        enable_raw_mode()?;
        ACQUIRED.store(true, Ordering::SeqCst);
        let guard = Self { _private: () };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok((guard, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Leave the alternate screen and raw mode, and show the cursor again.
/// Does nothing unless the terminal is currently acquired.
pub fn restore() -> io::Result<()> {
    release_once(&ACQUIRED, || {
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )
    })
}

fn release_once<F>(acquired: &AtomicBool, release: F) -> io::Result<()>
where
    F: FnOnce() -> io::Result<()>,
{
    if acquired.swap(false, Ordering::SeqCst) {
        release()
    } else {
        Ok(())
    }
}

/// Restore the terminal before the default hook prints, so panic messages
/// land on the normal screen.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}
