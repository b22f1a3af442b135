pub mod config;
pub mod error;
pub mod models;
pub mod voice;

pub use config::PipelineConfig;
pub use error::Error;
pub use models::{
    Article, GeneratedCandidate, PipelineRecord, QualityDecision, RawFeedEntry, ResearchData,
    RoutingAction,
};
pub use voice::VoiceProfile;

pub type Result<T> = std::result::Result<T, Error>;
