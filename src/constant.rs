use std::time::Duration;

pub const DEFAULT_FEED_URLS: [&str; 3] = [
    "https://feeds.feedburner.com/TheHackersNews",
    "https://www.bleepingcomputer.com/feed/",
    "https://www.darkreading.com/rss.xml",
];

pub const DEFAULT_KEYWORDS: [&str; 6] = [
    "zero-day",
    "ransomware",
    "breach",
    "exploit",
    "vulnerability",
    "malware",
];

pub const MAX_ENTRIES_PER_FEED: usize = 5;
// Discord rejects messages over 2000 characters, header included.
pub const MAX_MESSAGE_LENGTH: usize = 1900;
pub const TRUNCATION_SUFFIX: &str = "\n\n... (truncated)";
pub const SUMMARY_PREVIEW_CHARS: usize = 200;

pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
pub const MAX_COMPLETION_TOKENS: u16 = 500;

pub const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(30);
pub const WEBHOOK_TIMEOUT_SECS: u64 = 10;
pub const LLM_TIMEOUT_SECS: u64 = 60;

pub const ANALYST_INSTRUCTIONS: &str = "You are a cybersecurity analyst. Create a brief summary (150 words) of the main threats, then list each article title with its link in markdown format.";

pub const NO_THREATS_REPORT: &str = "No major cybersecurity threats detected today. ✅";
pub const SUMMARY_ERROR_REPORT: &str = "Error generating summary. Check logs.";

pub const REPORT_DATE_FORMAT: &str = "%B %d, %Y";
