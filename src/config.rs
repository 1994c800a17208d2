use serde::{Deserialize, Serialize};

use std::str::FromStr;
use std::time::Duration;

use crate::constant::*;
use crate::error::ConfigError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    // OpenAI configuration
    pub openai_api_key: String,
    pub openai_api_base: Option<String>,
    pub openai_chat_model: String,
    pub max_completion_tokens: u16,
    pub llm_timeout_secs: u64,

    // Discord configuration
    pub discord_webhook: String,
    pub webhook_timeout_secs: u64,
    pub max_message_length: usize,

    // Feed configuration
    pub feed_urls: Vec<String>,
    pub keywords: Vec<String>,
    pub max_entries_per_feed: usize,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Required credentials are checked first, so a missing key is reported
    /// before any optional value is parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let openai_api_key = var("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let discord_webhook =
            var("DISCORD_WEBHOOK").ok_or(ConfigError::Missing("DISCORD_WEBHOOK"))?;

        let openai_api_base = var("OPENAI_API_BASE");
        let openai_chat_model =
            var("OPENAI_CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.into());
        let max_completion_tokens = parse_or(
            "MAX_COMPLETION_TOKENS",
            var("MAX_COMPLETION_TOKENS"),
            MAX_COMPLETION_TOKENS,
        )?;
        let llm_timeout_secs = parse_or("LLM_TIMEOUT_SECS", var("LLM_TIMEOUT_SECS"), LLM_TIMEOUT_SECS)?;

        let webhook_timeout_secs = parse_or(
            "WEBHOOK_TIMEOUT_SECS",
            var("WEBHOOK_TIMEOUT_SECS"),
            WEBHOOK_TIMEOUT_SECS,
        )?;
        let max_message_length = parse_or(
            "MAX_MESSAGE_LENGTH",
            var("MAX_MESSAGE_LENGTH"),
            MAX_MESSAGE_LENGTH,
        )?;

        let feed_urls = var("THREAT_FEED_URLS")
            .map(|urls| split_list(&urls))
            .unwrap_or_else(|| DEFAULT_FEED_URLS.iter().map(|s| s.to_string()).collect());
        let keywords = var("THREAT_KEYWORDS")
            .map(|keywords| split_list(&keywords))
            .unwrap_or_else(|| DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect());
        let max_entries_per_feed = parse_or(
            "MAX_ENTRIES_PER_FEED",
            var("MAX_ENTRIES_PER_FEED"),
            MAX_ENTRIES_PER_FEED,
        )?;

        Ok(Config {
            openai_api_key,
            openai_api_base,
            openai_chat_model,
            max_completion_tokens,
            llm_timeout_secs,
            discord_webhook,
            webhook_timeout_secs,
            max_message_length,
            feed_urls,
            keywords,
            max_entries_per_feed,
        })
    }

    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout_secs)
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DISCORD_WEBHOOK", "https://discord.com/api/webhooks/1/abc"),
        ]))
        .unwrap();

        assert_eq!(config.openai_chat_model, "gpt-4o-mini");
        assert_eq!(config.openai_api_base, None);
        assert_eq!(config.max_completion_tokens, 500);
        assert_eq!(config.max_entries_per_feed, 5);
        assert_eq!(config.max_message_length, 1900);
        assert_eq!(config.webhook_timeout(), Duration::from_secs(10));
        assert_eq!(config.feed_urls.len(), 3);
        assert_eq!(config.feed_urls[0], "https://feeds.feedburner.com/TheHackersNews");
        assert_eq!(config.keywords.len(), 6);
    }

    #[test]
    fn test_missing_api_key() {
        let err = Config::from_lookup(lookup(&[(
            "DISCORD_WEBHOOK",
            "https://discord.com/api/webhooks/1/abc",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
        assert_eq!(err.to_string(), "OPENAI_API_KEY not set");
    }

    #[test]
    fn test_empty_webhook_is_missing() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DISCORD_WEBHOOK", "  "),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DISCORD_WEBHOOK")));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DISCORD_WEBHOOK", "https://discord.com/api/webhooks/1/abc"),
            ("OPENAI_CHAT_MODEL", "gpt-4o"),
            ("THREAT_FEED_URLS", "https://a.example/rss, https://b.example/rss,"),
            ("THREAT_KEYWORDS", "phishing,botnet"),
            ("MAX_ENTRIES_PER_FEED", "10"),
            ("MAX_MESSAGE_LENGTH", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.openai_chat_model, "gpt-4o");
        assert_eq!(
            config.feed_urls,
            vec!["https://a.example/rss", "https://b.example/rss"]
        );
        assert_eq!(config.keywords, vec!["phishing", "botnet"]);
        assert_eq!(config.max_entries_per_feed, 10);
        assert_eq!(config.max_message_length, 1500);
    }

    #[test]
    fn test_invalid_number() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DISCORD_WEBHOOK", "https://discord.com/api/webhooks/1/abc"),
            ("MAX_ENTRIES_PER_FEED", "five"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "MAX_ENTRIES_PER_FEED",
                ..
            }
        ));
    }
}
