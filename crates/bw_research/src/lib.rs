pub mod feeds;
pub mod relevance;
pub mod topics;
pub mod triage;

pub use feeds::{FeedSource, RssFeedSource};
pub use relevance::RelevanceScorer;
pub use topics::{normalize_topic, trending_topics, ANCHOR_TOPICS};
pub use triage::NewsTriage;

pub mod prelude {
    pub use super::{FeedSource, NewsTriage, RelevanceScorer, RssFeedSource};
    pub use bw_core::{Article, Error, RawFeedEntry, Result};
}
