use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use bw_core::{Error, GeneratedCandidate, ResearchData, Result, VoiceProfile};

use crate::{prompt, voice, Generator};

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

const MAX_TOKENS: u32 = 120;
const TEMPERATURE: f64 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Drafts posts through an OpenAI-compatible chat-completions API.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: VoiceProfile,
    rng: Mutex<StdRng>,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, model: String, voice: VoiceProfile) -> Self {
        Self::with_seed(api_key, model, voice, None)
    }

    pub fn with_seed(
        api_key: String,
        model: String,
        voice: VoiceProfile,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model,
            voice,
            rng: Mutex::new(rng),
        }
    }
}

impl fmt::Debug for OpenAiGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiGenerator")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, research: &ResearchData) -> Result<GeneratedCandidate> {
        let system = {
            let mut rng = self.rng.lock().unwrap();
            prompt::system_prompt(&self.voice, &mut *rng)
        };

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt::user_prompt(research),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| Error::Generation("completion had no choices".to_string()))?;

        Ok(GeneratedCandidate {
            voice_alignment_score: voice::alignment_score(&content, &self.voice),
            model_used: self.model.clone(),
            character_count: content.chars().count(),
            content,
        })
    }
}
