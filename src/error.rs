use thiserror::Error;

#[derive(Debug, Error)]
pub enum TyperError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("event stream closed")]
    EventsClosed,

    #[error("vocabulary `{name}` is unavailable: {reason}")]
    Vocabulary { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TyperError>;
