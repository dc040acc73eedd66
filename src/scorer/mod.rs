mod term_stat;

pub use term_stat::TermStat;

use crate::{
    error::{Error, Result},
    tokenizer::Tokenizer,
};
use std::collections::HashMap;

/// Maximum number of rows returned by [`Scorer::score`].
pub const MAX_RESULTS: usize = 50;

/// Ranks the words of a single document by TF-IDF.
///
/// There is no corpus: IDF is computed against the document itself, so rare
/// words rank high and a word making up the whole document scores zero.
pub struct Scorer {
    tokenizer: Tokenizer,
}

impl Scorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    /// Top [`MAX_RESULTS`] words by IDF, highest first.
    ///
    /// Words with equal IDF keep the order in which they first appear.
    pub fn score(&self, text: &str) -> Result<Vec<TermStat>> {
        let mut stats = self.term_stats(text)?;

        // stable, so ties stay in first-appearance order
        stats.sort_by(|a, b| b.idf.total_cmp(&a.idf));
        stats.truncate(MAX_RESULTS);

        Ok(stats)
    }

    /// Statistics for every distinct word, in order of first appearance.
    pub fn term_stats(&self, text: &str) -> Result<Vec<TermStat>> {
        let tokens = self.tokenizer.tokenize(text);
        let total = tokens.len();

        if total == 0 {
            return Err(Error::EmptyInput);
        }

        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut word_count: Vec<(String, usize)> = Vec::new();

        for token in tokens {
            if let Some(&pos) = positions.get(&token) {
                word_count[pos].1 += 1;
            } else {
                positions.insert(token.clone(), word_count.len());
                word_count.push((token, 1));
            }
        }

        tracing::debug!(tokens = total, distinct = word_count.len(), "counted words");

        Ok(word_count
            .into_iter()
            .map(|(word, count)| TermStat::new(word, count, total))
            .collect())
    }
}
