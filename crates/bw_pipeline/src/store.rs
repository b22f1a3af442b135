use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use bw_core::{PipelineRecord, Result};

/// Destination for per-run pipeline records.
#[async_trait]
pub trait ResultsStore: Send + Sync {
    /// Persist one pipeline run record.
    async fn store_run(&self, record: &PipelineRecord) -> Result<()>;
}

/// Writes one pretty-printed JSON record per day under the analytics dir.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for_today(&self) -> PathBuf {
        self.dir
            .join(format!("pipeline_results_{}.json", Utc::now().format("%Y-%m-%d")))
    }
}

#[async_trait]
impl ResultsStore for JsonFileStore {
    async fn store_run(&self, record: &PipelineRecord) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for_today();
        let body = serde_json::to_vec_pretty(record)?;
        tokio::fs::write(&path, body).await?;
        info!("📊 Results stored in {}", path.display());
        Ok(())
    }
}

/// Discards every record; used by dry runs.
pub struct NullStore;

#[async_trait]
impl ResultsStore for NullStore {
    async fn store_run(&self, _record: &PipelineRecord) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bw_core::{GeneratedCandidate, QualityDecision, ResearchData, RoutingAction};

    fn record() -> PipelineRecord {
        PipelineRecord {
            research: ResearchData::default(),
            content: GeneratedCandidate {
                content: "Draft #AI".to_string(),
                voice_alignment_score: 0.7,
                model_used: "dummy".to_string(),
                character_count: 9,
            },
            quality: QualityDecision {
                score: 0.75,
                passed: true,
                issues: vec![],
            },
            posting: RoutingAction::ApprovedForPosting,
            pipeline_duration_seconds: 0.2,
        }
    }

    #[tokio::test]
    async fn writes_a_dated_json_record() {
        let dir = std::env::temp_dir().join(format!("bw_store_test_{}", std::process::id()));
        let store = JsonFileStore::new(&dir);
        store.store_run(&record()).await.unwrap();

        let path = store.path_for_today();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let back: PipelineRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.posting, RoutingAction::ApprovedForPosting);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn null_store_accepts_everything() {
        NullStore.store_run(&record()).await.unwrap();
    }
}
