use std::rc::Rc;

use log::info;
use ratatui::backend::Backend;

use crate::config::GameContext;
use crate::error::Result;
use crate::mode::Mode;
use crate::runtime::EventSource;
use crate::surface::Surface;

/// Run modes one after another, starting from the help screen, until one quits.
pub fn run<B: Backend, E: EventSource>(
    surface: &mut Surface<B>,
    events: &mut E,
    ctx: Rc<GameContext>,
) -> Result<()> {
    let mut next = Some(Mode::help(ctx));
    while let Some(mode) = next {
        next = mode.run(surface, events)?;
    }
    info!("quit");
    Ok(())
}
