// src/services/reviews.rs

//! Review fetcher service.
//!
//! Pages through the customer-reviews RSS feed for one app, normalizing
//! the label-wrapped entries into [`Review`] records. Pagination stops at
//! the first page that yields no usable entries.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::models::Review;
use crate::utils::http::Transport;

/// Page-scoped reviews feed URL for one app.
fn reviews_url(page: u32, app_id: u64) -> String {
    format!("https://itunes.apple.com/rss/customerreviews/page={page}/id={app_id}/sortby=mostrecent/json")
}

/// Service for fetching customer reviews.
pub struct ReviewFetcher {
    transport: Arc<dyn Transport>,
}

impl ReviewFetcher {
    /// Create a new review fetcher over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch up to `max_pages` pages of reviews for an app.
    ///
    /// Returns reviews in feed order (page ascending, within-page order
    /// preserved). The first page that yields zero usable entries ends
    /// pagination; it is end-of-data, not an error. Transport failures
    /// propagate and abort the run.
    pub async fn fetch_reviews(
        &self,
        app_id: u64,
        country: &str,
        max_pages: u32,
    ) -> Result<Vec<Review>> {
        let mut out = Vec::new();

        for page in 1..=max_pages {
            let url = reviews_url(page, app_id);
            let data = self.transport.get_json(&url, &[("cc", country)]).await?;

            let entries = feed_entries(&data);
            // A leading entry carrying "im:name" is the feed header, not
            // a review.
            let entries = match entries.first() {
                Some(first) if first.get("im:name").is_some_and(|v| !v.is_null()) => &entries[1..],
                _ => entries,
            };

            if entries.is_empty() {
                log::debug!("App {}: page {} empty, stopping pagination", app_id, page);
                break;
            }

            out.extend(entries.iter().map(normalize_entry));
        }

        Ok(out)
    }
}

/// The `feed.entry` list of a reviews response, empty when absent or not
/// a list.
fn feed_entries(data: &Value) -> &[Value] {
    data.get("feed")
        .and_then(|feed| feed.get("entry"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Normalize one feed entry, tolerating missing or null sub-objects at
/// every nesting level.
fn normalize_entry(entry: &Value) -> Review {
    Review {
        title: label(entry, "title"),
        content: label(entry, "content"),
        rating: rating(entry),
        author: entry
            .get("author")
            .and_then(|a| a.get("name"))
            .and_then(|n| n.get("label"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        updated: label(entry, "updated"),
    }
}

/// Extract `entry[key].label` as a string, defaulting to "".
fn label(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(|v| v.get("label"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Extract the star rating, defaulting to 0 when absent or unparseable.
fn rating(entry: &Value) -> u32 {
    match entry.get("im:rating").and_then(|v| v.get("label")) {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(v) => v.as_u64().unwrap_or(0) as u32,
        None => 0,
    }
}
