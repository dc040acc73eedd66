use crate::{
    error::{Error, Result},
    scorer::TermStat,
    upload::Ranking,
};
use minijinja::{context, Environment};
use serde::Serialize;

/// A table row with the numbers already formatted for display.
#[derive(Serialize)]
struct Row<'a> {
    word: &'a str,
    tf: String,
    idf: String,
    tfidf: String,
}

impl<'a> From<&'a TermStat> for Row<'a> {
    fn from(stat: &'a TermStat) -> Self {
        Self {
            word: &stat.word,
            tf: format!("{:.4}", stat.tf),
            idf: format!("{:.4}", stat.idf),
            tfidf: format!("{:.4}", stat.tfidf),
        }
    }
}

/// HTML pages of the upload service. Templates ending in `.html` are
/// auto-escaped.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        env.add_template("base.html", include_str!("../templates/base.html"))?;
        env.add_template("index.html", include_str!("../templates/index.html"))?;
        env.add_template("results.html", include_str!("../templates/results.html"))?;
        env.add_template("error.html", include_str!("../templates/error.html"))?;

        Ok(Self { env })
    }

    /// The upload form.
    pub fn form(&self) -> Result<String> {
        Ok(self.env.get_template("index.html")?.render(context!())?)
    }

    /// The results page, one table row per term in ranking order.
    pub fn results(&self, ranking: &Ranking) -> Result<String> {
        let rows: Vec<Row> = ranking.results.iter().map(Row::from).collect();

        Ok(self.env.get_template("results.html")?.render(context!(
            filename => ranking.filename,
            rows => rows
        ))?)
    }

    pub fn error(&self, filename: &str, error: &Error) -> Result<String> {
        Ok(self.env.get_template("error.html")?.render(context!(
            filename => filename,
            status => error.status(),
            detail => error.detail()
        ))?)
    }
}

/// Plain-text table with the same columns as the HTML page.
pub fn render_text(ranking: &Ranking) -> String {
    let width = ranking
        .results
        .iter()
        .map(|stat| stat.word.chars().count())
        .chain(std::iter::once("WORD".len()))
        .max()
        .unwrap_or_default();

    let header = format!(
        "{}\n{:<width$}  {:>8}  {:>8}  {:>8}\n",
        ranking.filename, "WORD", "TF", "IDF", "TF-IDF"
    );

    let rows = ranking
        .results
        .iter()
        .map(|stat| {
            format!(
                "{:<width$}  {:>8.4}  {:>8.4}  {:>8.4}\n",
                stat.word, stat.tf, stat.idf, stat.tfidf
            )
        })
        .collect::<String>();

    header + &rows
}

pub fn render_json(rankings: &[Ranking]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rankings)?)
}
