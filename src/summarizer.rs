use crate::article::Article;
use crate::constant::*;
use crate::error::LlmError;
use crate::llm::TextGenerator;

#[derive(Debug)]
pub enum Report {
    NoThreats,
    Generated(String),
    Failed(LlmError),
}

impl Report {
    pub fn text(&self) -> &str {
        match self {
            Report::NoThreats => NO_THREATS_REPORT,
            Report::Generated(text) => text,
            Report::Failed(_) => SUMMARY_ERROR_REPORT,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Report::Generated(_))
    }

    pub fn failure(&self) -> Option<&LlmError> {
        match self {
            Report::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct Summarizer {
    generator: Box<dyn TextGenerator>,
}

impl Summarizer {
    #[allow(dead_code)]
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self::from_boxed(Box::new(generator))
    }

    pub fn from_boxed(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn summarize(&self, articles: &[Article]) -> Report {
        if articles.is_empty() {
            return Report::NoThreats;
        }

        let prompt = build_prompt(articles);
        match self.generator.generate(ANALYST_INSTRUCTIONS, &prompt).await {
            Ok(text) => Report::Generated(text),
            Err(e) => {
                tracing::error!("OpenAI error: {}", e);
                Report::Failed(e)
            }
        }
    }
}

/// The trailing "..." is appended whether or not the summary was cut.
pub fn build_prompt(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|a| {
            format!(
                "Title: {}\nLink: {}\nSummary: {}...",
                a.title,
                a.link,
                a.summary_preview(SUMMARY_PREVIEW_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
