use std::path::PathBuf;
use std::time::Duration;

use crate::{Error, Result};

/// Default AI-news feeds polled by the research phase.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://feeds.feedburner.com/oreilly/radar",
    "https://rss.cnn.com/rss/edition.rss",
    "https://feeds.bbci.co.uk/news/technology/rss.xml",
    "https://techcrunch.com/feed/",
    "https://www.wired.com/feed/rss",
];

/// Explicit pipeline configuration, passed into constructors.
///
/// Environment lookups happen only in [`PipelineConfig::from_env`] at the
/// binary boundary; nothing below reads ambient state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub feeds: Vec<String>,
    pub window_hours: i64,
    pub model: String,
    pub generator_timeout: Duration,
    pub api_key: Option<String>,
    pub voice_profile_path: PathBuf,
    pub results_dir: PathBuf,
    pub outputs_path: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|f| f.to_string()).collect(),
            window_hours: 24,
            model: "gpt-4o-mini".to_string(),
            generator_timeout: Duration::from_secs(30),
            api_key: None,
            voice_profile_path: PathBuf::from("data/voice_profile.json"),
            results_dir: PathBuf::from("data/analytics"),
            outputs_path: None,
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        if let Ok(path) = std::env::var("VOICE_PROFILE") {
            config.voice_profile_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
            config.outputs_path = Some(PathBuf::from(path));
        }
        config
    }

    /// The API credential, or a fatal configuration error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| Error::Config("OPENAI_API_KEY is not set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pipeline_limits() {
        let config = PipelineConfig::default();
        assert_eq!(config.feeds.len(), 5);
        assert_eq!(config.window_hours, 24);
        assert_eq!(config.generator_timeout, Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn missing_api_key_is_config_error() {
        let config = PipelineConfig::default();
        let err = config.require_api_key().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
