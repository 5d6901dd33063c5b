use std::rc::Rc;

use ratatui::backend::Backend;

use super::{HelpMode, Mode, Regions, Transition};
use crate::config::{GameContext, Keymap};
use crate::error::Result;
use crate::layout::str_width;
use crate::runtime::TyperEvent;
use crate::surface::Surface;

/// Banner shown over the finished game. The last line blanks out the text below it.
fn banner(keymap: &Keymap) -> String {
    let lines = [
        " Game Over ".to_string(),
        format!(" Press {} to continue. ", keymap.confirm.label.to_uppercase()),
    ];
    let width = lines.iter().map(|l| str_width(l)).max().unwrap_or(0) as usize;
    format!("{}\n{}\n{}", lines[0], lines[1], " ".repeat(width))
}

pub struct GameOverMode {
    ctx: Rc<GameContext>,
}

impl GameOverMode {
    pub fn new(ctx: Rc<GameContext>) -> Self {
        Self { ctx }
    }

    pub fn enter<B: Backend>(&mut self, surface: &mut Surface<B>) -> Result<()> {
        surface.center_text(self.ctx.theme().notice, 3, &banner(self.ctx.keymap()));
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
            TyperEvent::Key(key) if keymap.confirm.matches(&key) => {
                let base = self.ctx.theme().base;
                let regions = Regions::new(surface.size().1);
                surface.clear_rows(base, regions.display);
                surface.clear_rows(base, regions.input);
                Ok(Transition::Switch(Mode::Help(HelpMode::new(Rc::clone(
                    &self.ctx,
                )))))
            }
            TyperEvent::Key(_) => Ok(Transition::Stay),
            TyperEvent::Resize => {
                surface.sync()?;
                Ok(Transition::Stay)
            }
        }
    }
}
