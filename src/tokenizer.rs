use crate::error::{Error, Result};
use regex::Regex;

/// Runs of letters, numbers and underscores.
///
/// Combining marks are separators and superscript or fraction numbers are word
/// characters, so `cafe\u{301}` yields `cafe` and `x²` stays whole.
const WORD_PATTERN: &str = r"[\p{L}\p{N}_]+";

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(WORD_PATTERN)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Lowercases `text` and returns its words in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();

        self.regex
            .find_iter(&text)
            .map(|token| token.as_str().to_string())
            .collect()
    }
}
