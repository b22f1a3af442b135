pub mod orchestrator;
pub mod outputs;
pub mod quality;
pub mod store;

pub use orchestrator::{PipelineOrchestrator, PipelineOutcome};
pub use outputs::AutomationOutputs;
pub use quality::QualityGate;
pub use store::{JsonFileStore, NullStore, ResultsStore};

pub mod prelude {
    pub use super::{PipelineOrchestrator, PipelineOutcome, QualityGate, ResultsStore};
    pub use bw_core::{PipelineRecord, QualityDecision, Result, RoutingAction};
}
