use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermStat {
    pub word: String,
    pub tf: f64,
    pub idf: f64,
    pub tfidf: f64,
}

impl TermStat {
    /// Statistics for a word seen `count` times among `total` tokens.
    ///
    /// IDF is the single-document form `ln(total / count)`, i.e. `-ln(tf)`.
    pub fn new(word: String, count: usize, total: usize) -> Self {
        let tf = count as f64 / total as f64;
        let idf = (total as f64 / count as f64).ln();

        Self {
            word,
            tf,
            idf,
            tfidf: tf * idf,
        }
    }
}
