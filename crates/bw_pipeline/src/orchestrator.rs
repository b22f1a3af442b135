use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::time::timeout;
use tracing::{error, info, warn};

use bw_core::{
    GeneratedCandidate, PipelineConfig, PipelineRecord, QualityDecision, ResearchData,
    RoutingAction,
};
use bw_generation::{fallback, Generator};
use bw_research::{FeedSource, NewsTriage};

use crate::outputs::AutomationOutputs;
use crate::quality::QualityGate;
use crate::store::ResultsStore;

/// Terminal report of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub success: bool,
    pub content: String,
    pub quality_score: f64,
    pub action: RoutingAction,
    pub issues: Vec<String>,
    pub duration_seconds: f64,
}

/// Sequences research → generation → quality → routing → persistence.
///
/// One run at a time; every phase before persistence degrades instead of
/// aborting, and persistence itself is best-effort.
pub struct PipelineOrchestrator {
    feed_source: Arc<dyn FeedSource>,
    generator: Arc<dyn Generator>,
    store: Arc<dyn ResultsStore>,
    triage: NewsTriage,
    outputs: Option<AutomationOutputs>,
    config: PipelineConfig,
    rng: StdRng,
}

impl PipelineOrchestrator {
    pub fn new(
        config: PipelineConfig,
        feed_source: Arc<dyn FeedSource>,
        generator: Arc<dyn Generator>,
        store: Arc<dyn ResultsStore>,
    ) -> Self {
        let triage = NewsTriage::new(config.window_hours);
        let outputs = config.outputs_path.clone().map(AutomationOutputs::new);
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            feed_source,
            generator,
            store,
            triage,
            outputs,
            config,
            rng,
        }
    }

    /// Execute one complete pipeline run.
    pub async fn run(&mut self) -> PipelineOutcome {
        let started = Instant::now();
        info!("🚀 Starting content pipeline");

        info!("📊 Phase 1: researching trending AI content");
        let research = self.research_phase().await;
        info!("📰 Found {} relevant articles", research.news_articles.len());
        if !research.trending_topics.is_empty() {
            info!("🔥 Trending topics: {}", research.trending_topics.join(", "));
        }

        info!("✍️ Phase 2: generating content");
        let candidate = self.generation_phase(&research).await;
        info!(
            "🎤 Voice alignment score: {:.2} ({})",
            candidate.voice_alignment_score, candidate.model_used
        );

        info!("🔍 Phase 3: quality control");
        let decision = QualityGate::evaluate(&candidate);
        info!(
            "🔍 Quality score: {:.2} ({})",
            decision.score,
            if decision.passed { "PASS" } else { "NEEDS REVIEW" }
        );

        info!("🎯 Phase 4: routing decision");
        let action = self.routing_phase(&candidate, &decision);

        info!("📈 Phase 5: storing run results");
        let record = PipelineRecord {
            research,
            content: candidate.clone(),
            quality: decision.clone(),
            posting: action,
            pipeline_duration_seconds: started.elapsed().as_secs_f64(),
        };
        if let Err(e) = self.store.store_run(&record).await {
            // Persistence is best-effort; the run outcome stands either way.
            error!("Failed to store results: {}", e);
        }

        PipelineOutcome {
            success: true,
            content: candidate.content,
            quality_score: decision.score,
            action,
            issues: decision.issues,
            duration_seconds: started.elapsed().as_secs_f64(),
        }
    }

    async fn research_phase(&self) -> ResearchData {
        let now = Utc::now();
        let entries = match self.feed_source.fetch_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                // Keep going with empty research rather than aborting the run.
                warn!("Research phase degraded: {}", e);
                Vec::new()
            }
        };
        let news_articles = self.triage.triage(&entries, now);
        let trending_topics = self.triage.trending_topics(&news_articles);
        ResearchData {
            news_articles,
            trending_topics,
            research_timestamp: Some(now),
        }
    }

    async fn generation_phase(&mut self, research: &ResearchData) -> GeneratedCandidate {
        match timeout(self.config.generator_timeout, self.generator.generate(research)).await {
            Ok(Ok(candidate)) => candidate,
            Ok(Err(e)) => {
                warn!("Content generation failed, using fallback: {}", e);
                fallback::fallback_candidate(&mut self.rng)
            }
            Err(_) => {
                warn!(
                    "Content generation timed out after {:?}, using fallback",
                    self.config.generator_timeout
                );
                fallback::fallback_candidate(&mut self.rng)
            }
        }
    }

    fn routing_phase(
        &self,
        candidate: &GeneratedCandidate,
        decision: &QualityDecision,
    ) -> RoutingAction {
        let action = if decision.passed {
            info!("✅ Content approved for posting");
            RoutingAction::ApprovedForPosting
        } else {
            warn!("⚠️ Content queued for human review");
            RoutingAction::QueuedForReview
        };

        if let Some(outputs) = &self.outputs {
            if let Err(e) = outputs.record_routing(action, &candidate.content, decision) {
                error!("Failed to write automation outputs: {}", e);
            }
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use bw_core::{Error, RawFeedEntry, Result};

    struct MockFeedSource {
        entries: Vec<RawFeedEntry>,
        fail: bool,
    }

    #[async_trait]
    impl FeedSource for MockFeedSource {
        fn name(&self) -> &str {
            "mock"
        }

        async fn fetch_entries(&self) -> Result<Vec<RawFeedEntry>> {
            if self.fail {
                return Err(Error::Feed("feeds unreachable".to_string()));
            }
            Ok(self.entries.clone())
        }
    }

    #[derive(Debug)]
    struct MockGenerator {
        fail: bool,
    }

    #[async_trait]
    impl Generator for MockGenerator {
        fn name(&self) -> &str {
            "mock"
        }

        async fn generate(&self, _research: &ResearchData) -> Result<GeneratedCandidate> {
            if self.fail {
                return Err(Error::Generation("model unavailable".to_string()));
            }
            let content =
                "Here's a strong draft for you. What would you automate first? #ResponsibleAI"
                    .to_string();
            Ok(GeneratedCandidate {
                voice_alignment_score: 0.85,
                model_used: "mock".to_string(),
                character_count: content.chars().count(),
                content,
            })
        }
    }

    #[derive(Default)]
    struct MockStore {
        records: Mutex<Vec<PipelineRecord>>,
        fail: bool,
    }

    #[async_trait]
    impl ResultsStore for MockStore {
        async fn store_run(&self, record: &PipelineRecord) -> Result<()> {
            if self.fail {
                return Err(Error::Storage("disk full".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            seed: Some(7),
            ..Default::default()
        }
    }

    fn ai_entry() -> RawFeedEntry {
        RawFeedEntry {
            title: "AI bias in lending models".to_string(),
            summary: "responsible ai audit finds algorithmic bias".to_string(),
            content: String::new(),
            link: "https://example.com/bias".to_string(),
            published: None,
            updated: None,
            source: "https://example.com/feed".to_string(),
        }
    }

    #[tokio::test]
    async fn happy_path_approves_and_persists() {
        let store = Arc::new(MockStore::default());
        let mut pipeline = PipelineOrchestrator::new(
            config(),
            Arc::new(MockFeedSource { entries: vec![ai_entry()], fail: false }),
            Arc::new(MockGenerator { fail: false }),
            store.clone(),
        );

        let outcome = pipeline.run().await;
        assert!(outcome.success);
        assert_eq!(outcome.action, RoutingAction::ApprovedForPosting);
        assert!(outcome.issues.is_empty());

        let records = store.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].research.news_articles.len(), 1);
        assert_eq!(records[0].posting, RoutingAction::ApprovedForPosting);
    }

    #[tokio::test]
    async fn failed_research_degrades_to_empty_lists() {
        let store = Arc::new(MockStore::default());
        let mut pipeline = PipelineOrchestrator::new(
            config(),
            Arc::new(MockFeedSource { entries: vec![], fail: true }),
            Arc::new(MockGenerator { fail: false }),
            store.clone(),
        );

        let outcome = pipeline.run().await;
        assert!(outcome.success);

        let records = store.records.lock().unwrap();
        assert!(records[0].research.news_articles.is_empty());
        assert!(records[0].research.trending_topics.is_empty());
    }

    #[tokio::test]
    async fn failed_generation_substitutes_the_fallback() {
        let store = Arc::new(MockStore::default());
        let mut pipeline = PipelineOrchestrator::new(
            config(),
            Arc::new(MockFeedSource { entries: vec![ai_entry()], fail: false }),
            Arc::new(MockGenerator { fail: true }),
            store.clone(),
        );

        let outcome = pipeline.run().await;
        assert!(outcome.success);

        let records = store.records.lock().unwrap();
        assert_eq!(records[0].content.model_used, "fallback");
        assert_eq!(records[0].content.voice_alignment_score, 0.8);
    }

    #[tokio::test]
    async fn failed_persistence_does_not_change_the_outcome() {
        let store = Arc::new(MockStore { records: Mutex::new(vec![]), fail: true });
        let mut pipeline = PipelineOrchestrator::new(
            config(),
            Arc::new(MockFeedSource { entries: vec![ai_entry()], fail: false }),
            Arc::new(MockGenerator { fail: false }),
            store,
        );

        let outcome = pipeline.run().await;
        assert!(outcome.success);
        assert_eq!(outcome.action, RoutingAction::ApprovedForPosting);
    }
}
