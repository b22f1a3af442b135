use rand::seq::SliceRandom;
use rand::Rng;

use bw_core::GeneratedCandidate;

/// Pre-authored posts used when the generator is unavailable.
const FALLBACK_POSTS: &[&str] = &[
    "You don't need a computer science degree to make AI work for you. Start with \
     curiosity, not code. What's one area where AI could simplify your work? \
     #ResponsibleAI #AIForEveryone",
    "Here's what I discovered: The best AI practitioners ask better questions, not \
     better algorithms. What questions are you asking about AI in your field? \
     #ResponsibleAI #AIEthics",
    "The real secret to AI success? It's not about the technology, it's about \
     understanding the problem you're trying to solve. What problem would you \
     tackle first? #ResponsibleAI",
];

const FALLBACK_ALIGNMENT: f64 = 0.8;

/// A fixed candidate substituted when generation fails.
pub fn fallback_candidate<R: Rng>(rng: &mut R) -> GeneratedCandidate {
    let content = FALLBACK_POSTS
        .choose(rng)
        .copied()
        .unwrap_or(FALLBACK_POSTS[0]);

    GeneratedCandidate {
        content: content.to_string(),
        voice_alignment_score: FALLBACK_ALIGNMENT,
        model_used: "fallback".to_string(),
        character_count: content.chars().count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fallback_is_marked_and_scored() {
        let candidate = fallback_candidate(&mut StdRng::seed_from_u64(1));
        assert_eq!(candidate.model_used, "fallback");
        assert_eq!(candidate.voice_alignment_score, 0.8);
        assert_eq!(candidate.character_count, candidate.content.chars().count());
        assert!(candidate.content.contains('#'));
        assert!(candidate.content.contains('?'));
    }

    #[test]
    fn choice_is_reproducible_under_a_seed() {
        let a = fallback_candidate(&mut StdRng::seed_from_u64(42));
        let b = fallback_candidate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.content, b.content);
    }
}
