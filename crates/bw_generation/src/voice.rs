use bw_core::VoiceProfile;

/// Seven point-earning checks are summed over a fixed six-point
/// denominator, keeping parity with the historical scoring range.
const MAX_POINTS: f64 = 6.0;

const PRONOUNS: &[&str] = &["you", "i", "we", "your", "our"];
const ENGAGEMENT_WORDS: &[&str] = &["what", "how", "why", "think", "thoughts"];

/// Normalized voice-alignment score in [0, 1]. Deterministic and total.
pub fn alignment_score(content: &str, voice: &VoiceProfile) -> f64 {
    let lowered = content.to_lowercase();
    let mut score = 0.0_f64;

    if voice
        .signature_phrases
        .iter()
        .any(|phrase| lowered.contains(&phrase.to_lowercase()))
    {
        score += 1.0;
    }

    if voice
        .power_words
        .iter()
        .any(|word| lowered.contains(&word.to_lowercase()))
    {
        score += 1.0;
    }

    for term in &voice.avoided_language {
        if lowered.contains(&term.to_lowercase()) {
            score -= 0.5;
        }
    }

    if has_personal_pronoun(&lowered) {
        score += 1.0;
    }

    if content.contains('?') || ENGAGEMENT_WORDS.iter().any(|word| lowered.contains(word)) {
        score += 1.0;
    }

    let word_count = content.split_whitespace().count();
    if (15..=35).contains(&word_count) {
        score += 1.0;
    }

    if content.contains('#') {
        score += 1.0;
    }

    (score / MAX_POINTS).clamp(0.0, 1.0)
}

fn has_personal_pronoun(lowered: &str) -> bool {
    lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|token| PRONOUNS.contains(&token))
}
