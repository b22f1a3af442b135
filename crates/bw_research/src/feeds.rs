use async_trait::async_trait;
use feed_rs::model::Feed;
use feed_rs::parser;
use futures::future::join_all;
use reqwest::Client;
use tracing::{error, info};
use url::Url;

use bw_core::{Error, RawFeedEntry, Result};

/// A provider of raw feed entries for the research phase.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the name of this source
    fn name(&self) -> &str;

    /// Fetch raw entries from every configured feed.
    async fn fetch_entries(&self) -> Result<Vec<RawFeedEntry>>;
}

/// Fetches and parses RSS/Atom feeds over HTTP.
pub struct RssFeedSource {
    client: Client,
    feeds: Vec<String>,
}

impl RssFeedSource {
    pub fn new(feeds: Vec<String>) -> Self {
        Self {
            client: Client::new(),
            feeds,
        }
    }

    async fn fetch_feed(&self, feed_url: &str) -> Result<Vec<RawFeedEntry>> {
        let url = Url::parse(feed_url)
            .map_err(|e| Error::Feed(format!("invalid feed url {}: {}", feed_url, e)))?;
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let feed = parser::parse(body.as_ref())
            .map_err(|e| Error::Feed(format!("failed to parse {}: {}", feed_url, e)))?;
        Ok(map_feed(feed, feed_url))
    }
}

/// Flatten a parsed feed into raw entries; date fields stay as strings so
/// triage can treat unparseable dates as undated.
fn map_feed(feed: Feed, feed_url: &str) -> Vec<RawFeedEntry> {
    feed.entries
        .into_iter()
        .map(|entry| RawFeedEntry {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            summary: entry.summary.map(|s| s.content).unwrap_or_default(),
            content: entry.content.and_then(|c| c.body).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            published: entry.published.map(|d| d.to_rfc3339()),
            updated: entry.updated.map(|d| d.to_rfc3339()),
            source: feed_url.to_string(),
        })
        .collect()
}

#[async_trait]
impl FeedSource for RssFeedSource {
    fn name(&self) -> &str {
        "rss"
    }

    async fn fetch_entries(&self) -> Result<Vec<RawFeedEntry>> {
        let fetches = self
            .feeds
            .iter()
            .map(|feed_url| async move { (feed_url.as_str(), self.fetch_feed(feed_url).await) });

        let mut entries = Vec::new();
        for (feed_url, result) in join_all(fetches).await {
            match result {
                Ok(mut feed_entries) => {
                    info!("📰 {} entries from {}", feed_entries.len(), feed_url);
                    entries.append(&mut feed_entries);
                }
                // One unreachable or malformed feed never blocks the rest.
                Err(e) => error!("Error fetching {}: {}", feed_url, e),
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Tech feed</title>
    <item>
      <title>AI bias in hiring tools</title>
      <description>Researchers found algorithmic bias in screening software.</description>
      <link>https://example.com/ai-bias</link>
      <pubDate>Tue, 04 Aug 2026 09:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Untimed follow-up</title>
      <description>No pubDate on this one.</description>
      <link>https://example.com/follow-up</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn maps_rss_items_to_raw_entries() {
        let feed = parser::parse(SAMPLE_RSS.as_bytes()).unwrap();
        let entries = map_feed(feed, "https://example.com/feed");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "AI bias in hiring tools");
        assert_eq!(entries[0].link, "https://example.com/ai-bias");
        assert_eq!(entries[0].source, "https://example.com/feed");
        assert!(entries[0].published.is_some());
        assert!(entries[1].published.is_none());
        assert!(entries[1]
            .summary
            .contains("No pubDate"));
    }

    #[tokio::test]
    async fn invalid_url_is_a_feed_error() {
        let source = RssFeedSource::new(vec!["not a url".to_string()]);
        let err = source.fetch_feed("not a url").await.unwrap_err();
        assert!(matches!(err, Error::Feed(_)));
    }

    #[tokio::test]
    async fn bad_feeds_are_skipped_not_fatal() {
        let source = RssFeedSource::new(vec!["not a url".to_string()]);
        let entries = source.fetch_entries().await.unwrap();
        assert!(entries.is_empty());
    }
}
