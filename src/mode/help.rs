use std::rc::Rc;

use ratatui::backend::Backend;

use super::{GameMode, Mode, Transition};
use crate::config::GameContext;
use crate::error::Result;
use crate::runtime::TyperEvent;
use crate::surface::Surface;

/// Idle screen listing the key bindings
pub struct HelpMode {
    ctx: Rc<GameContext>,
}

impl HelpMode {
    pub fn new(ctx: Rc<GameContext>) -> Self {
        Self { ctx }
    }

    pub fn enter<B: Backend>(&mut self, surface: &mut Surface<B>) -> Result<()> {
        surface.clear();
        surface.center_text(self.ctx.theme().base, 1, &self.ctx.keymap().help_text());
        surface.sync()
    }

    pub fn on_event<B: Backend>(
        &mut self,
        event: TyperEvent,
        surface: &mut Surface<B>,
    ) -> Result<Transition> {
        let keymap = self.ctx.keymap();
        match event {
            TyperEvent::Key(key) if keymap.quit.matches(&key) => Ok(Transition::Quit),
            TyperEvent::Key(key) if keymap.new_game.matches(&key) => Ok(Transition::Switch(
                Mode::Game(GameMode::new(Rc::clone(&self.ctx))),
            )),
            TyperEvent::Key(_) => Ok(Transition::Stay),
            TyperEvent::Resize => {
                surface.sync()?;
                Ok(Transition::Stay)
            }
        }
    }
}
