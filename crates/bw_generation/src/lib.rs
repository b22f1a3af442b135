use std::sync::Arc;

use async_trait::async_trait;

use bw_core::{GeneratedCandidate, PipelineConfig, ResearchData, Result, VoiceProfile};

pub mod fallback;
pub mod models;
pub mod prompt;
pub mod voice;

/// A model that can draft one post from research context.
#[async_trait]
pub trait Generator: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Draft a candidate post from the research context.
    async fn generate(&self, research: &ResearchData) -> Result<GeneratedCandidate>;
}

/// Build a generator by backend name. `dummy` runs without credentials.
pub fn create_generator(
    backend: &str,
    config: &PipelineConfig,
    voice: VoiceProfile,
) -> Result<Arc<dyn Generator>> {
    match backend {
        "dummy" => Ok(Arc::new(models::dummy::DummyGenerator::new(voice))),
        _ => {
            let api_key = config.require_api_key()?.to_string();
            Ok(Arc::new(models::openai::OpenAiGenerator::with_seed(
                api_key,
                config.model.clone(),
                voice,
                config.seed,
            )))
        }
    }
}

pub mod prelude {
    pub use super::{create_generator, Generator};
    pub use bw_core::{GeneratedCandidate, ResearchData, Result, VoiceProfile};
}
