use async_trait::async_trait;

use crate::article::Article;
use crate::client::get_http_client;
use crate::error::FeedError;

use super::Feed;

pub struct RssFeed {
    url: String,
    client: reqwest::Client,
}

impl RssFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, get_http_client().clone())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn from_urls(urls: &[impl AsRef<str>]) -> Vec<Box<dyn Feed>> {
        urls.iter()
            .map(|url| Box::new(RssFeed::new(url.as_ref())) as Box<dyn Feed>)
            .collect()
    }
}

#[async_trait]
impl Feed for RssFeed {
    fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<Article>, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }
        let rss = response.bytes().await?;
        parse_channel(&rss[..], limit)
    }
}

/// Parse a feed document and map its first `limit` entries to articles.
///
/// RSS 2.0 goes through `rss`; anything it rejects or reads no items from
/// (Atom, RSS 1.0, JSON Feed) is handed to `feed_rs`.
pub fn parse_channel(content: &[u8], limit: usize) -> Result<Vec<Article>, FeedError> {
    match rss::Channel::read_from(content) {
        Ok(channel) if !channel.items().is_empty() => {
            tracing::debug!(
                "Parsed channel {:?} with {} items",
                channel.title(),
                channel.items().len()
            );
            Ok(channel
                .items()
                .iter()
                .take(limit)
                .map(|item| {
                    Article::new(
                        item.title().unwrap_or_default(),
                        item.link().unwrap_or_default(),
                        item.description().unwrap_or_default(),
                    )
                })
                .collect())
        }
        Ok(_) => parse_feed(content, limit),
        Err(e) => {
            tracing::debug!("Not an RSS 2.0 channel ({}), trying other formats", e);
            parse_feed(content, limit)
        }
    }
}

fn parse_feed(content: &[u8], limit: usize) -> Result<Vec<Article>, FeedError> {
    let feed = feed_rs::parser::parse(content)?;
    tracing::debug!(
        "Parsed {:?} feed with {} entries",
        feed.feed_type,
        feed.entries.len()
    );

    Ok(feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| {
            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default();
            Article::new(
                entry.title.map(|t| t.content).unwrap_or_default(),
                entry
                    .links
                    .into_iter()
                    .next()
                    .map(|link| link.href)
                    .unwrap_or_default(),
                summary,
            )
        })
        .collect())
}
