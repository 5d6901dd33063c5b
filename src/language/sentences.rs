use itertools::Itertools;

use super::core::Language;

/// Capitalize the first word, join with spaces and close with `end`.
pub fn sentence<S: AsRef<str>>(words: &[S], end: char) -> String {
    let mut s = words.iter().map(|w| w.as_ref()).join(" ");
    if let Some(first) = s.chars().next() {
        let upper: String = first.to_uppercase().collect();
        s.replace_range(..first.len_utf8(), &upper);
    }
    s.push(end);
    s
}

impl Language {
    /// `sentences` random sentences of `words_per_sentence` words, space separated.
    pub fn random_text(&self, sentences: usize, words_per_sentence: usize) -> String {
        (0..sentences)
            .map(|_| sentence(&self.get_random(words_per_sentence), '.'))
            .join(" ")
    }
}
