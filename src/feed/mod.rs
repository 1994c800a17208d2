pub mod syndication;

use async_trait::async_trait;

use crate::article::Article;
use crate::error::FeedError;

#[async_trait]
pub trait Feed: Send + Sync {
    fn url(&self) -> &str;
    async fn fetch(&self, limit: usize) -> Result<Vec<Article>, FeedError>;
}

#[derive(Debug, Default)]
pub struct Collection {
    pub articles: Vec<Article>,
    pub failed_sources: Vec<String>,
}

/// Fetch every feed in order, keeping at most `limit` entries from each.
///
/// A feed that fails contributes nothing; the remaining feeds are still read.
pub async fn collect_articles(feeds: &[Box<dyn Feed>], limit: usize) -> Collection {
    let mut collection = Collection::default();
    for feed in feeds {
        match feed.fetch(limit).await {
            Ok(mut articles) => {
                articles.truncate(limit);
                tracing::info!("Fetched {} articles from {}", articles.len(), feed.url());
                collection.articles.extend(articles);
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", feed.url(), e);
                collection.failed_sources.push(feed.url().to_string());
            }
        }
    }
    collection
}
