use chrono::Local;

use crate::config::Config;
use crate::feed::syndication::RssFeed;
use crate::feed::{collect_articles, Feed};
use crate::filter::KeywordFilter;
use crate::llm::openai::OpenAiGenerator;
use crate::llm::TextGenerator;
use crate::publish::discord::DiscordWebhook;
use crate::publish::{compose_message, Publisher};
use crate::summarizer::Summarizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sources: usize,
    pub failed_sources: usize,
    pub fetched: usize,
    pub relevant: usize,
    pub generated: bool,
    pub summary_error: Option<String>,
    pub published: bool,
}

pub struct Pipeline {
    feeds: Vec<Box<dyn Feed>>,
    filter: KeywordFilter,
    summarizer: Summarizer,
    publisher: Box<dyn Publisher>,
    max_entries_per_feed: usize,
    max_message_length: usize,
}

impl Pipeline {
    pub async fn run_once(&self) -> RunSummary {
        tracing::info!("{}", "=".repeat(60));
        tracing::info!(
            "Threat intel automation - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        tracing::info!("{}", "=".repeat(60));

        let collection = collect_articles(&self.feeds, self.max_entries_per_feed).await;
        tracing::info!("Total articles fetched: {}", collection.articles.len());

        let filtered = self.filter.apply(&collection.articles);
        tracing::info!("Threat-related articles: {}", filtered.len());
        for article in filtered.iter() {
            tracing::info!("  - {}", article.title);
        }

        let report = self.summarizer.summarize(&filtered).await;
        if let Some(e) = report.failure() {
            tracing::warn!("Publishing fallback report, summarization failed: {}", e);
        }
        tracing::info!("Generated summary:\n{}", report.text());

        let message = compose_message(
            report.text(),
            Local::now().date_naive(),
            self.max_message_length,
        );
        let published = match self.publisher.publish(&message).await {
            Ok(()) => {
                tracing::info!("Successfully sent to Discord");
                true
            }
            Err(e) => {
                tracing::error!("Discord error: {}", e);
                false
            }
        };

        tracing::info!("Automation complete");

        RunSummary {
            sources: self.feeds.len(),
            failed_sources: collection.failed_sources.len(),
            fetched: collection.articles.len(),
            relevant: filtered.len(),
            generated: report.is_generated(),
            summary_error: report.failure().map(ToString::to_string),
            published,
        }
    }
}

pub struct PipelineBuilder {
    feeds: Vec<Box<dyn Feed>>,
    keywords: Vec<String>,
    generator: Option<Box<dyn TextGenerator>>,
    publisher: Option<Box<dyn Publisher>>,
    max_entries_per_feed: usize,
    max_message_length: usize,
}

impl PipelineBuilder {
    pub fn new(config: &Config) -> Self {
        Self {
            feeds: vec![],
            keywords: config.keywords.clone(),
            generator: None,
            publisher: None,
            max_entries_per_feed: config.max_entries_per_feed,
            max_message_length: config.max_message_length,
        }
    }

    /// Wire up the production feeds, OpenAI and the Discord webhook.
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new(config)
            .with_generator(OpenAiGenerator::new(config))
            .with_publisher(DiscordWebhook::new(config));
        builder.feeds = RssFeed::from_urls(config.feed_urls.as_slice());
        builder
    }

    #[allow(dead_code)]
    pub fn with_feed(mut self, feed: impl Feed + 'static) -> Self {
        self.feeds.push(Box::new(feed));
        self
    }

    pub fn with_generator(mut self, generator: impl TextGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn with_publisher(mut self, publisher: impl Publisher + 'static) -> Self {
        self.publisher = Some(Box::new(publisher));
        self
    }

    pub fn build(self) -> anyhow::Result<Pipeline> {
        let generator = self
            .generator
            .ok_or(anyhow::anyhow!("No text generator configured"))?;
        let publisher = self
            .publisher
            .ok_or(anyhow::anyhow!("No publisher configured"))?;

        Ok(Pipeline {
            feeds: self.feeds,
            filter: KeywordFilter::new(self.keywords.as_slice()),
            summarizer: Summarizer::from_boxed(generator),
            publisher,
            max_entries_per_feed: self.max_entries_per_feed,
            max_message_length: self.max_message_length,
        })
    }
}
