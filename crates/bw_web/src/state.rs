/// Shared read-only state for the demo API.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: String,
    pub version: String,
    pub generator_configured: bool,
}
