use chrono::{DateTime, Local};

use crate::progress::Progress;

/// What a single typed character did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keystroke {
    pub matched: bool,
    pub word_completed: bool,
}

/// State of one game: the practice text and how far into it the user is.
#[derive(Debug, Clone)]
pub struct TypingSession {
    text: Vec<char>,
    index: usize,
    pub progress: Progress,
}

impl TypingSession {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            index: 0,
            progress: Progress::default(),
        }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn expected(&self) -> Option<char> {
        self.text.get(self.index).copied()
    }

    /// Start the clock if this is the first keystroke. Returns true when it started.
    pub fn start_at(&mut self, now: DateTime<Local>) -> bool {
        self.progress.start(now)
    }

    /// Compare `c` with the expected character and advance. Mismatches still advance.
    pub fn type_char(&mut self, c: char) -> Keystroke {
        let matched = self.expected() == Some(c);
        if self.index < self.text.len() {
            self.index += 1;
        }

        let word_completed = c.is_whitespace();
        if word_completed {
            self.progress.complete_word();
        }

        Keystroke {
            matched,
            word_completed,
        }
    }

    pub fn backspace(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn is_complete(&self) -> bool {
        self.index == self.text.len()
    }
}
