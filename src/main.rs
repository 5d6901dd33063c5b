use std::{error::Error, io::stdin, rc::Rc};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::tty::IsTty;
use typer::{
    app,
    config::{GameConfig, GameContext},
    language::Language,
    runtime::CrosstermEventSource,
    surface::Surface,
    terminal::{self, TerminalGuard},
};

/// a game for practicing typing
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A game for practicing typing. Type the sentences shown on screen; mistakes are marked in red and your words per minute are shown as you go.\n\nNew game: Ctrl-n   Stop game: Ctrl-d   Quit: Ctrl-c"
)]
pub struct Cli {}

fn main() -> Result<(), Box<dyn Error>> {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let language = Language::english()?;
    let ctx = Rc::new(GameContext::new(GameConfig::default(), Box::new(language)));

    terminal::install_panic_hook();
    let (_guard, terminal) = TerminalGuard::acquire()?;
    let mut surface = Surface::new(terminal)?;
    let mut events = CrosstermEventSource::new();

    app::run(&mut surface, &mut events, ctx)?;

    Ok(())
}
