// Library surface for headless/integration tests and reuse.
pub mod app;
pub mod config;
pub mod error;
pub mod language;
pub mod layout;
pub mod mode;
pub mod progress;
pub mod runtime;
pub mod session;
pub mod surface;
pub mod terminal;

pub use error::{Result, TyperError};
