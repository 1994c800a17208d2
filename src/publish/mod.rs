pub mod discord;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::constant::*;
use crate::error::PublishError;

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, content: &str) -> Result<(), PublishError>;
}

/// Cut the report to `max_chars` characters and mark it, if it is longer.
pub fn truncate_report(report: &str, max_chars: usize) -> String {
    match report.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &report[..idx], TRUNCATION_SUFFIX),
        None => report.to_string(),
    }
}

pub fn compose_message(report: &str, date: NaiveDate, max_chars: usize) -> String {
    format!(
        "🛡️ **Daily Threat Intel Report - {}**\n\n{}",
        date.format(REPORT_DATE_FORMAT),
        truncate_report(report, max_chars)
    )
}
