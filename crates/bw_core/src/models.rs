use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry as it arrives from a syndication feed, before triage.
///
/// Date fields carry the feed's raw strings; parsing happens during triage
/// so a bad date never drops the whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFeedEntry {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub link: String,
    pub published: Option<String>,
    pub updated: Option<String>,
    pub source: String,
}

/// An AI-relevant article that survived triage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub source: String,
    pub relevance_score: f64,
}

/// Everything the research phase hands to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResearchData {
    pub news_articles: Vec<Article>,
    pub trending_topics: Vec<String>,
    pub research_timestamp: Option<DateTime<Utc>>,
}

/// A draft post produced by a generator, scored against the voice profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCandidate {
    pub content: String,
    pub voice_alignment_score: f64,
    pub model_used: String,
    pub character_count: usize,
}

/// Deterministic pass/fail verdict over a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDecision {
    pub score: f64,
    pub passed: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAction {
    ApprovedForPosting,
    QueuedForReview,
}

impl RoutingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingAction::ApprovedForPosting => "approved_for_posting",
            RoutingAction::QueuedForReview => "queued_for_review",
        }
    }
}

/// One record per pipeline run, written by the results store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRecord {
    pub research: ResearchData,
    pub content: GeneratedCandidate,
    pub quality: QualityDecision,
    pub posting: RoutingAction,
    pub pipeline_duration_seconds: f64,
}
