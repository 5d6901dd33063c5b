use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};

use crate::language::TextSource;

/// A single key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    pub label: &'static str,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode, label: &'static str) -> Self {
        Self {
            modifiers,
            code,
            label,
        }
    }

    pub const fn key(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::NONE, code, label)
    }

    pub const fn ctrl(c: char, label: &'static str) -> Self {
        Self::new(KeyModifiers::CONTROL, KeyCode::Char(c), label)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap {
    /// ends the program from any mode
    pub quit: KeyBinding,
    /// abandons the running game
    pub stop: KeyBinding,
    pub new_game: KeyBinding,
    /// leaves the game over banner
    pub confirm: KeyBinding,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            quit: KeyBinding::ctrl('c', "Ctrl-c"),
            stop: KeyBinding::ctrl('d', "Ctrl-d"),
            new_game: KeyBinding::ctrl('n', "Ctrl-n"),
            confirm: KeyBinding::key(KeyCode::Enter, "Enter"),
        }
    }
}

impl Keymap {
    /// Help screen contents, one binding per line.
    pub fn help_text(&self) -> String {
        format!(
            "\nNew game    {}\nStop game   {}\nQuit        {}",
            self.new_game.label, self.stop.label, self.quit.label
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub base: Style,
    pub notice: Style,
    pub typed: Style,
    pub mistake: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Style::default(),
            notice: Style::default().fg(Color::Yellow),
            typed: Style::default(),
            mistake: Style::default().fg(Color::Red),
        }
    }
}

/// Shape of the practice text generated for each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextShape {
    pub sentences: usize,
    pub words_per_sentence: usize,
}

impl Default for TextShape {
    fn default() -> Self {
        Self {
            sentences: 5,
            words_per_sentence: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameConfig {
    pub keymap: Keymap,
    pub theme: Theme,
    pub text: TextShape,
}

/// Everything a mode needs besides the surface. Shared between modes via `Rc`.
pub struct GameContext {
    pub config: GameConfig,
    pub source: Box<dyn TextSource>,
}

impl GameContext {
    pub fn new(config: GameConfig, source: Box<dyn TextSource>) -> Self {
        Self { config, source }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }
}
