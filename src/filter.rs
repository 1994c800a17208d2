use crate::article::Article;

#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new(keywords: &[impl AsRef<str>]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Substring match on the lowercased title and summary, so "exploiting"
    /// counts as "exploit".
    pub fn matches(&self, article: &Article) -> bool {
        let content = format!("{}{}", article.title, article.summary).to_lowercase();
        self.keywords.iter().any(|keyword| content.contains(keyword))
    }

    pub fn apply(&self, articles: &[Article]) -> Vec<Article> {
        articles
            .iter()
            .filter(|article| self.matches(article))
            .cloned()
            .collect()
    }
}
