use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};

use bw_core::{Article, RawFeedEntry};

use crate::relevance::RelevanceScorer;
use crate::topics;

const MAX_ARTICLES: usize = 10;
const SUMMARY_LIMIT: usize = 300;

/// Filters raw feed entries down to a bounded, ranked article list.
pub struct NewsTriage {
    scorer: RelevanceScorer,
    window: Duration,
    max_articles: usize,
}

impl NewsTriage {
    pub fn new(window_hours: i64) -> Self {
        Self {
            scorer: RelevanceScorer::new(),
            window: Duration::hours(window_hours),
            max_articles: MAX_ARTICLES,
        }
    }

    /// Triage a batch of raw entries against the recency window.
    ///
    /// Entries are judged independently; a malformed entry is skipped and
    /// never aborts the batch. Returns at most ten articles sorted by
    /// relevance, newest first within equal scores.
    pub fn triage(&self, entries: &[RawFeedEntry], now: DateTime<Utc>) -> Vec<Article> {
        let cutoff = now - self.window;
        let mut articles: Vec<Article> = entries
            .iter()
            .filter_map(|entry| self.triage_entry(entry, cutoff, now))
            .collect();

        articles.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.published.cmp(&a.published))
        });
        articles.truncate(self.max_articles);
        articles
    }

    /// Trending topics over an already-triaged article list.
    pub fn trending_topics(&self, articles: &[Article]) -> Vec<String> {
        topics::trending_topics(articles)
    }

    fn triage_entry(
        &self,
        entry: &RawFeedEntry,
        cutoff: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<Article> {
        if entry.title.trim().is_empty() {
            return None;
        }

        let published = entry
            .published
            .as_deref()
            .and_then(parse_feed_date)
            .or_else(|| entry.updated.as_deref().and_then(parse_feed_date));

        // Many feeds omit reliable dates; undated entries bypass the window.
        if let Some(timestamp) = published {
            if timestamp < cutoff || timestamp > now {
                return None;
            }
        }

        let full_text = format!("{} {} {}", entry.title, entry.summary, entry.content);
        if !self.scorer.is_related(&full_text) {
            return None;
        }

        Some(Article {
            title: entry.title.clone(),
            summary: truncate_chars(&entry.summary, SUMMARY_LIMIT),
            link: entry.link.clone(),
            published,
            source: entry.source.clone(),
            relevance_score: self.scorer.score(&full_text),
        })
    }
}

/// Feeds disagree on date formats; try RFC 3339 first, then RFC 2822.
fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|date| date.with_timezone(&Utc))
        .ok()
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
