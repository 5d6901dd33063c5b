use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use crate::error::{Result, TyperError};
use crate::layout;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

/// A vocabulary bundled with the binary
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    pub fn new(name: &str) -> Result<Self> {
        read_language_from_file(&format!("{name}.json"))
    }

    pub fn english() -> Result<Self> {
        Self::new("english")
    }

    /// `num` distinct words in random order. Capped at the vocabulary size.
    pub fn get_random(&self, num: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();

        self.words.choose_multiple(&mut rng, num).cloned().collect()
    }

    /// Display width of the longest word in the vocabulary.
    pub fn longest_word(&self) -> u16 {
        layout::longest_word(&self.words)
    }
}

fn read_language_from_file(file_name: &str) -> Result<Language> {
    let vocabulary_error = |reason: String| TyperError::Vocabulary {
        name: file_name.to_string(),
        reason,
    };

    let file = LANG_DIR
        .get_file(file_name)
        .ok_or_else(|| vocabulary_error("not bundled".to_string()))?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| vocabulary_error("not valid utf-8".to_string()))?;

    let lang: Language = from_str(contents).map_err(|e| vocabulary_error(e.to_string()))?;
    if lang.words.is_empty() {
        return Err(vocabulary_error("word list is empty".to_string()));
    }

    Ok(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_language_english() {
        let lang = Language::english().unwrap();

        assert_eq!(lang.name, "english");
        assert!(!lang.words.is_empty());
        assert_eq!(lang.size as usize, lang.words.len());
    }

    #[test]
    fn test_language_deserialization() {
        let json_data = r#"
        {
            "name": "test",
            "size": 3,
            "words": ["hello", "world", "test"]
        }
        "#;

        let lang: Language = from_str(json_data).expect("Failed to deserialize test language");

        assert_eq!(lang.name, "test");
        assert_eq!(lang.size, 3);
        assert_eq!(lang.longest_word(), 5);
    }

    #[test]
    fn test_read_nonexistent_language_file() {
        let result = Language::new("klingon");
        assert_matches!(result, Err(TyperError::Vocabulary { name, .. }) if name == "klingon.json");
    }

    #[test]
    fn test_get_random_words_are_distinct() {
        let lang = Language::english().unwrap();
        let words = lang.get_random(5);

        assert_eq!(words.len(), 5);
        for w in &words {
            assert!(lang.words.contains(w));
        }
        let mut deduped = words.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 5);
    }

    #[test]
    fn test_get_random_capped_at_vocabulary() {
        let lang = Language {
            name: "tiny".into(),
            size: 2,
            words: vec!["a".into(), "b".into()],
        };
        assert_eq!(lang.get_random(10).len(), 2);
    }

    #[test]
    fn test_longest_word_covers_vocabulary() {
        let lang = Language::english().unwrap();
        let longest = lang.longest_word();

        assert!(longest > 0);
        assert!(lang.words.iter().all(|w| w.len() as u16 <= longest));
    }
}
