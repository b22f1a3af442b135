use bw_core::{GeneratedCandidate, QualityDecision};

const PASS_THRESHOLD: f64 = 0.7;
const POST_LIMIT: usize = 280;
const SOFT_LIMIT: usize = 320;

/// Weighted pass/fail gate over a generated candidate.
///
/// Check weights sum to 1.0: voice 0.4, length 0.25, hashtags 0.15,
/// engagement 0.15, provenance 0.05.
pub struct QualityGate;

impl QualityGate {
    pub fn evaluate(candidate: &GeneratedCandidate) -> QualityDecision {
        let mut score = 0.0;

        if candidate.voice_alignment_score > 0.75 {
            score += 0.4;
        } else if candidate.voice_alignment_score > 0.5 {
            score += 0.2;
        }

        let count = candidate.character_count;
        if (50..=POST_LIMIT).contains(&count) {
            score += 0.25;
        } else if count <= SOFT_LIMIT {
            score += 0.1;
        }

        if candidate.content.contains('#') {
            score += 0.15;
        }

        if candidate.content.contains('?') {
            score += 0.15;
        }

        if candidate.model_used != "fallback" {
            score += 0.05;
        }

        let mut issues = Vec::new();
        if count > POST_LIMIT {
            issues.push(format!("Content too long ({}/{} characters)", count, POST_LIMIT));
        }
        if candidate.voice_alignment_score < 0.5 {
            issues.push(format!(
                "Low voice alignment ({:.2})",
                candidate.voice_alignment_score
            ));
        }
        if !candidate.content.contains('#') {
            issues.push("Missing hashtags".to_string());
        }

        QualityDecision {
            score,
            passed: score > PASS_THRESHOLD,
            issues,
        }
    }
}
