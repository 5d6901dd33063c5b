use std::rc::Rc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use log::info;
use ratatui::{backend::Backend, layout::Position, style::Style};

use super::{typed_char, GameOverMode, HelpMode, Mode, Regions, Transition};
use crate::config::GameContext;
use crate::error::Result;
use crate::runtime::TyperEvent;
use crate::session::TypingSession;
use crate::surface::Surface;

const START_PROMPT: &str = "Start typing";

enum Edit {
    Backspace,
    Newline,
    Char(char),
}

/// A running game: practice text on top, the user's typing below.
pub struct GameMode {
    ctx: Rc<GameContext>,
    session: TypingSession,
    cursor: Position,
    regions: Regions,
    width: u16,
    longest_word: u16,
}

impl GameMode {
    /// Start a session over freshly generated practice text.
    pub fn new(ctx: Rc<GameContext>) -> Self {
        let text = ctx.source.practice_text(&ctx.config.text);
        let longest_word = ctx.source.longest_word();
        Self {
            session: TypingSession::new(&text),
            cursor: Position::default(),
            regions: Regions::new(0),
            width: 0,
            longest_word,
            ctx,
        }
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn enter<B: Backend>(&mut self, surface: &mut Surface<B>) -> Result<()> {
        let theme = *self.ctx.theme();
        let (width, height) = surface.size();
        self.width = width;
        self.regions = Regions::new(height);
        self.cursor = Position::new(0, self.regions.input.start);

        surface.hline(theme.base, self.regions.divider, width);
        surface.hline(theme.base, self.regions.footer, width);
        surface.clear_rows(theme.base, self.regions.display.clone());
        surface.clear_rows(theme.base, self.regions.input.clone());

        let text: String = self.session.text().iter().collect();
        surface.fill_text(theme.base, 0, self.regions.display.start, &text);
        surface.show_cursor(self.cursor.x, self.cursor.y);
        self.set_status(surface, theme.notice, START_PROMPT);
        surface.sync()
    }

    pub fn on_event<B: Backend>(
        &mut self,
        event: TyperEvent,
        surface: &mut Surface<B>,
    ) -> Result<Transition> {
        let key = match event {
            TyperEvent::Key(key) => key,
            TyperEvent::Resize => {
                surface.sync()?;
                return Ok(Transition::Stay);
            }
        };

        let keymap = *self.ctx.keymap();
        if keymap.quit.matches(&key) {
            return Ok(Transition::Quit);
        }
        if keymap.stop.matches(&key) {
            info!("game stopped at {}/{}", self.session.index(), self.session.text().len());
            self.clear_regions(surface);
            surface.hide_cursor();
            return Ok(Transition::Switch(Mode::Help(HelpMode::new(Rc::clone(
                &self.ctx,
            )))));
        }

        let Some(edit) = edit_for(&key) else {
            return Ok(Transition::Stay);
        };

        if self.session.start_at(Local::now()) {
            info!("typing started");
            self.set_status(surface, self.ctx.theme().base, "");
        }
        self.apply(edit, surface);

        surface.show_cursor(self.cursor.x, self.cursor.y);
        if self.session.is_complete() {
            info!("game finished: {}", self.session.progress.status_line());
            surface.hide_cursor();
            surface.sync()?;
            return Ok(Transition::Switch(Mode::GameOver(GameOverMode::new(
                Rc::clone(&self.ctx),
            ))));
        }
        surface.sync()?;
        Ok(Transition::Stay)
    }

    fn apply<B: Backend>(&mut self, edit: Edit, surface: &mut Surface<B>) {
        let theme = *self.ctx.theme();
        match edit {
            // stays on the current row
            Edit::Backspace => {
                self.cursor.x = self.cursor.x.saturating_sub(1);
                surface.puts(theme.base, self.cursor.x, self.cursor.y, " ");
                self.session.backspace();
            }
            // no check that the practice text breaks here
            Edit::Newline => self.next_row(),
            Edit::Char(c) => {
                let keystroke = self.session.type_char(c);
                let used =
                    surface.putexp(&theme, self.cursor.x, self.cursor.y, c, keystroke.matched);
                self.cursor.x = self.cursor.x.saturating_add(used.max(1));

                if keystroke.word_completed {
                    let status = self.session.progress.status_line();
                    self.set_status(surface, theme.base, &status);
                    if self.cursor.x >= self.width.saturating_sub(self.longest_word) {
                        self.next_row();
                    }
                }
            }
        }
    }

    fn next_row(&mut self) {
        self.cursor = Position::new(0, self.cursor.y.saturating_add(1));
    }

    fn set_status<B: Backend>(&self, surface: &mut Surface<B>, style: Style, text: &str) {
        let status = self.regions.status;
        surface.clear_rows(self.ctx.theme().base, status..status + 1);
        surface.puts(style, 0, status, text);
    }

    fn clear_regions<B: Backend>(&self, surface: &mut Surface<B>) {
        let base = self.ctx.theme().base;
        surface.clear_rows(base, self.regions.display.clone());
        surface.clear_rows(base, self.regions.input.clone());
    }
}

fn edit_for(key: &KeyEvent) -> Option<Edit> {
    match key.code {
        KeyCode::Backspace => Some(Edit::Backspace),
        KeyCode::Enter => Some(Edit::Newline),
        _ => typed_char(key).map(Edit::Char),
    }
}
