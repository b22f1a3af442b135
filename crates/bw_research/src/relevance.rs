use regex::Regex;

/// Phrases that signal the responsible-AI beat specifically.
const HIGH_VALUE_KEYWORDS: &[(&str, f64)] = &[
    ("responsible ai", 3.0),
    ("ai ethics", 2.5),
    ("ai bias", 2.5),
    ("algorithmic bias", 2.5),
    ("ai governance", 2.0),
    ("ai regulation", 2.0),
    ("ai safety", 2.0),
    ("ai transparency", 2.0),
    ("explainable ai", 2.0),
    ("algorithmic fairness", 2.0),
    ("ai audit", 1.5),
];

/// General AI terms, weighted lower than the high-value table.
const STANDARD_KEYWORDS: &[(&str, f64)] = &[
    ("generative ai", 1.2),
    ("artificial intelligence", 1.0),
    ("machine learning", 1.0),
    ("deep learning", 1.0),
    ("large language model", 1.0),
    ("llm", 1.0),
    ("neural network", 0.8),
    ("gpt", 0.8),
    ("algorithm", 0.6),
    ("automation", 0.5),
];

/// Flat vocabulary shared by the relevance gate and topic extraction.
pub const AI_VOCABULARY: &[&str] = &[
    "artificial intelligence",
    "machine learning",
    "deep learning",
    "neural network",
    "responsible ai",
    "ai ethics",
    "ai bias",
    "algorithmic bias",
    "algorithmic fairness",
    "ai governance",
    "ai regulation",
    "ai policy",
    "ai safety",
    "ai transparency",
    "chatbot",
    "automation",
    "ethics",
    "bias",
    "governance",
];

// Repeated phrases are rewarded, but capped so one spammed keyword cannot
// dominate the score.
const HIGH_VALUE_CAP: usize = 3;
const STANDARD_CAP: usize = 2;
const MAX_SCORE: f64 = 10.0;

/// Scores text for AI relevance with weighted keyword tables.
pub struct RelevanceScorer {
    patterns: Vec<Regex>,
}

impl RelevanceScorer {
    pub fn new() -> Self {
        // Structural patterns tolerate a few intervening words, e.g.
        // "machine and deep learning" or "algorithms showing bias".
        let patterns = [
            r"\bAI\b",
            r"(?i)\bmachine(?:\s+\w+){0,3}\s+learning\b",
            r"(?i)\bartificial(?:\s+\w+){0,3}\s+intelligence\b",
            r"(?i)\bneural(?:\s+\w+){0,3}\s+networks?\b",
            r"(?i)\bdeep(?:\s+\w+){0,3}\s+learning\b",
            r"(?i)\balgorithm\w*(?:\s+\w+){0,3}\s+bias\w*\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("relevance pattern"))
        .collect();

        Self { patterns }
    }

    /// Weighted keyword score, clamped to [0, 10]. Case-insensitive, total.
    pub fn score(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let lowered = text.to_lowercase();
        let mut score = 0.0;

        for (keyword, weight) in HIGH_VALUE_KEYWORDS {
            let hits = lowered.matches(keyword).count().min(HIGH_VALUE_CAP);
            score += weight * hits as f64;
        }
        for (keyword, weight) in STANDARD_KEYWORDS {
            let hits = lowered.matches(keyword).count().min(STANDARD_CAP);
            score += weight * hits as f64;
        }

        score.clamp(0.0, MAX_SCORE)
    }

    /// True when the text mentions AI at all, by vocabulary or structure.
    pub fn is_related(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        if AI_VOCABULARY.iter().any(|keyword| lowered.contains(keyword)) {
            return true;
        }
        self.patterns.iter().any(|pattern| pattern.is_match(text))
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero_and_is_unrelated() {
        let scorer = RelevanceScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert!(!scorer.is_related(""));
        assert!(!scorer.is_related("   "));
    }

    #[test]
    fn score_is_case_insensitive() {
        let scorer = RelevanceScorer::new();
        let text = "New study on Responsible AI and machine learning";
        assert_eq!(scorer.score(text), scorer.score(&text.to_uppercase()));
    }

    #[test]
    fn high_value_terms_outweigh_standard_terms() {
        let scorer = RelevanceScorer::new();
        let high = scorer.score("responsible AI in hiring");
        let standard = scorer.score("automation in hiring");
        assert!(high > standard);
    }

    #[test]
    fn repeated_keywords_are_capped() {
        let scorer = RelevanceScorer::new();
        let spam = "responsible ai ".repeat(20);
        assert!(scorer.score(&spam) <= MAX_SCORE);
        let twice = scorer.score("responsible ai responsible ai");
        let thrice = scorer.score("responsible ai responsible ai responsible ai");
        let four = scorer.score(&"responsible ai ".repeat(4));
        assert!(thrice > twice);
        assert_eq!(thrice, four);
    }

    #[test]
    fn score_never_exceeds_ten() {
        let scorer = RelevanceScorer::new();
        let loaded = "responsible AI, AI ethics, AI bias, algorithmic bias, \
                      AI governance, AI regulation, AI safety, AI transparency, \
                      explainable AI, algorithmic fairness, AI audit, \
                      artificial intelligence, machine learning, deep learning";
        assert_eq!(scorer.score(loaded), MAX_SCORE);
    }

    #[test]
    fn standalone_ai_token_is_related_but_air_is_not() {
        let scorer = RelevanceScorer::new();
        assert!(scorer.is_related("AI will reshape compliance work"));
        assert!(!scorer.is_related("Air quality dropped again this week"));
    }

    #[test]
    fn structural_patterns_allow_intervening_words() {
        let scorer = RelevanceScorer::new();
        assert!(scorer.is_related("machine and reinforcement learning advances"));
        assert!(scorer.is_related("the algorithm showed systematic bias"));
        assert!(scorer.is_related("deep metric learning results"));
    }
}
