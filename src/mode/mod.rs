//! The game's phases. Each mode owns control until it hands back the next one:
//!
//! ```text
//! Help --new game--> Game --text finished--> GameOver --confirm--> Help
//!                     \--stop-------------------------------------^
//! ```
//!
//! The quit key ends the program from any mode.

pub mod game;
pub mod game_over;
pub mod help;

use std::ops::Range;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::backend::Backend;

pub use game::GameMode;
pub use game_over::GameOverMode;
pub use help::HelpMode;

use crate::config::GameContext;
use crate::error::Result;
use crate::runtime::{EventSource, TyperEvent};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ModeKind {
    Help,
    Game,
    GameOver,
}

/// Outcome of handling one event
#[derive(Debug)]
pub enum Transition {
    Stay,
    Switch(Mode),
    Quit,
}

pub enum Mode {
    Help(HelpMode),
    Game(GameMode),
    GameOver(GameOverMode),
}

impl std::fmt::Debug for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Mode").field(&self.kind()).finish()
    }
}

impl Mode {
    pub fn help(ctx: Rc<GameContext>) -> Self {
        Mode::Help(HelpMode::new(ctx))
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Help(_) => ModeKind::Help,
            Mode::Game(_) => ModeKind::Game,
            Mode::GameOver(_) => ModeKind::GameOver,
        }
    }

    /// Draw the mode's initial screen.
    pub fn enter<B: Backend>(&mut self, surface: &mut Surface<B>) -> Result<()> {
        debug!("entering {} mode", self.kind());
        match self {
            Mode::Help(mode) => mode.enter(surface),
            Mode::Game(mode) => mode.enter(surface),
            Mode::GameOver(mode) => mode.enter(surface),
        }
    }

    pub fn on_event<B: Backend>(
        &mut self,
        event: TyperEvent,
        surface: &mut Surface<B>,
    ) -> Result<Transition> {
        match self {
            Mode::Help(mode) => mode.on_event(event, surface),
            Mode::Game(mode) => mode.on_event(event, surface),
            Mode::GameOver(mode) => mode.on_event(event, surface),
        }
    }

    /// Enter, then handle events until the mode yields. `None` means quit.
    pub fn run<B: Backend, E: EventSource>(
        mut self,
        surface: &mut Surface<B>,
        events: &mut E,
    ) -> Result<Option<Mode>> {
        self.enter(surface)?;
        loop {
            let event = events.next_event()?;
            match self.on_event(event, surface)? {
                Transition::Stay => {}
                Transition::Switch(next) => {
                    debug!("{} mode -> {} mode", self.kind(), next.kind());
                    return Ok(Some(next));
                }
                Transition::Quit => {
                    debug!("quit from {} mode", self.kind());
                    return Ok(None);
                }
            }
        }
    }
}

/// Row bands of the game screen for a grid `height` rows tall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// practice text
    pub display: Range<u16>,
    pub divider: u16,
    /// where the user's typing is echoed
    pub input: Range<u16>,
    pub footer: u16,
    pub status: u16,
}

impl Regions {
    pub fn new(height: u16) -> Self {
        let mid = height / 2;
        Self {
            display: 0..mid,
            divider: mid,
            input: mid + 1..height.saturating_sub(2),
            footer: height.saturating_sub(2),
            status: height.saturating_sub(1),
        }
    }
}

/// The character a key types, if it types one. Control and Alt chords don't.
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    let chord = key.modifiers & altgr;
    match key.code {
        // AltGr arrives as Ctrl+Alt on Windows
        KeyCode::Char(c) if chord.is_empty() || chord == altgr => Some(c),
        _ => None,
    }
}
