use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            summary: summary.into(),
        }
    }

    /// First `max_chars` characters of the summary, never splitting a code point.
    pub fn summary_preview(&self, max_chars: usize) -> &str {
        match self.summary.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.summary[..idx],
            None => &self.summary,
        }
    }
}

#[test]
fn test_summary_preview() {
    let article = Article::new("t", "l", "é".repeat(250));
    assert_eq!(article.summary_preview(200).chars().count(), 200);

    let short = Article::new("t", "l", "short");
    assert_eq!(short.summary_preview(200), "short");
}
