pub mod core;
pub mod sentences;

pub use self::core::Language;
pub use sentences::sentence;

use crate::config::TextShape;

/// Source of practice text for a game
pub trait TextSource {
    fn practice_text(&self, shape: &TextShape) -> String;

    /// Display width of the longest word this source can produce.
    fn longest_word(&self) -> u16;
}

impl TextSource for Language {
    fn practice_text(&self, shape: &TextShape) -> String {
        self.random_text(shape.sentences, shape.words_per_sentence)
    }

    fn longest_word(&self) -> u16 {
        Language::longest_word(self)
    }
}
