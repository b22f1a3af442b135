use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The configured persona a candidate post is scored against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProfile {
    pub personality: String,
    #[serde(default)]
    pub primary_traits: Vec<String>,
    pub audience: String,
    pub tone: String,
    pub signature_phrases: Vec<String>,
    pub power_words: Vec<String>,
    pub avoided_language: Vec<String>,
    #[serde(default)]
    pub guidelines_do: Vec<String>,
    #[serde(default)]
    pub guidelines_avoid: Vec<String>,
}

impl VoiceProfile {
    /// Load a profile from disk. A missing or invalid profile is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("voice profile not found at {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid voice profile: {}", e)))
    }
}
