use std::sync::mpsc::Receiver;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::error::{Result, TyperError};

/// Unified event type consumed by the modes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TyperEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize)
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> Result<TyperEvent>;
}

/// Production event source reading crossterm's event queue on the calling thread
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<TyperEvent> {
        loop {
            match event::read()? {
                // release/repeat reports are dropped so each key counts once
                CtEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TyperEvent::Key(key))
                }
                CtEvent::Resize(_, _) => return Ok(TyperEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Test event source fed through a channel
pub struct TestEventSource {
    rx: Receiver<TyperEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TyperEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn next_event(&mut self) -> Result<TyperEvent> {
        self.rx.recv().map_err(|_| TyperError::EventsClosed)
    }
}
