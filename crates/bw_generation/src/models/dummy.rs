use std::fmt;

use async_trait::async_trait;

use bw_core::{GeneratedCandidate, ResearchData, Result, VoiceProfile};

use crate::{voice, Generator};

/// Offline generator producing a deterministic draft from the research.
///
/// Useful for dry runs and tests; no credentials, no network.
pub struct DummyGenerator {
    voice: VoiceProfile,
}

impl DummyGenerator {
    pub fn new(voice: VoiceProfile) -> Self {
        Self { voice }
    }
}

impl fmt::Debug for DummyGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyGenerator").finish()
    }
}

#[async_trait]
impl Generator for DummyGenerator {
    fn name(&self) -> &str {
        "dummy"
    }

    async fn generate(&self, research: &ResearchData) -> Result<GeneratedCandidate> {
        let topic = research
            .trending_topics
            .first()
            .map(String::as_str)
            .unwrap_or("responsible AI");

        let content = format!(
            "Here's what I discovered about {}: progress beats perfection when teams \
             ask better questions first. What would you rethink this week? \
             #ResponsibleAI #AIEthics",
            topic
        );

        Ok(GeneratedCandidate {
            voice_alignment_score: voice::alignment_score(&content, &self.voice),
            model_used: "dummy".to_string(),
            character_count: content.chars().count(),
            content,
        })
    }
}
