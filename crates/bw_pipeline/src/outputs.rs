use std::io::Write;
use std::path::PathBuf;

use bw_core::{QualityDecision, Result, RoutingAction};

/// Key/value outputs for an automation context, one `NAME=value` per line.
pub struct AutomationOutputs {
    path: PathBuf,
}

impl AutomationOutputs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append the routing outcome to the outputs file.
    pub fn record_routing(
        &self,
        action: RoutingAction,
        content: &str,
        decision: &QualityDecision,
    ) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        match action {
            RoutingAction::ApprovedForPosting => {
                writeln!(file, "READY_TO_POST=true")?;
                writeln!(file, "APPROVED_CONTENT={}", single_line(content))?;
                writeln!(file, "QUALITY_SCORE={:.2}", decision.score)?;
            }
            RoutingAction::QueuedForReview => {
                writeln!(file, "NEEDS_REVIEW=true")?;
                writeln!(file, "REVIEW_CONTENT={}", single_line(content))?;
                writeln!(file, "QUALITY_SCORE={:.2}", decision.score)?;
                writeln!(file, "QUALITY_ISSUES={}", decision.issues.join("; "))?;
            }
        }
        Ok(())
    }
}

// Output values are line-oriented; flatten any embedded newlines.
fn single_line(content: &str) -> String {
    content.replace(['\r', '\n'], " ")
}
