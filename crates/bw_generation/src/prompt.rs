use rand::seq::SliceRandom;
use rand::Rng;

use bw_core::{ResearchData, VoiceProfile};

/// Render the system prompt from the voice profile.
///
/// The signature-phrase and guideline picks are the only randomness in the
/// pipeline; callers hold the rng so prompts stay reproducible under a seed.
pub fn system_prompt<R: Rng>(voice: &VoiceProfile, rng: &mut R) -> String {
    let signature = choose(&voice.signature_phrases, rng).unwrap_or("Here's the thing");
    let power_words = voice
        .power_words
        .iter()
        .take(5)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let avoided = voice
        .avoided_language
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    let rule_do = choose(&voice.guidelines_do, rng).unwrap_or("Write like you talk");
    let rule_avoid = choose(&voice.guidelines_avoid, rng).unwrap_or("Hype without substance");

    format!(
        "You are a social-media account with this personality:\n\n\
         CORE IDENTITY:\n- {personality}\n- Primary traits: {traits}\n\n\
         AUDIENCE: {audience}\n\n\
         TONE: {tone}\n\n\
         LANGUAGE STYLE:\n\
         - Use signature phrases like: \"{signature}\"\n\
         - Power words: {power_words}\n\
         - Avoid: {avoided}\n\n\
         VOICE RULES:\n- {rule_do}\n- Never: {rule_avoid}\n\n\
         Write posts that sound like a knowledgeable friend sharing \
         discoveries about responsible AI.",
        personality = voice.personality,
        traits = voice.primary_traits.join(", "),
        audience = voice.audience,
        tone = voice.tone,
    )
}

/// Render the user prompt from the research context.
pub fn user_prompt(research: &ResearchData) -> String {
    let mut context_parts = Vec::new();

    if !research.trending_topics.is_empty() {
        let topics = research
            .trending_topics
            .iter()
            .take(3)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        context_parts.push(format!("Trending AI topics: {}", topics));
    }
    for article in research.news_articles.iter().take(2) {
        context_parts.push(format!("Recent news: {}", article.title));
    }

    let context = if context_parts.is_empty() {
        "General AI ethics discussion".to_string()
    } else {
        context_parts.join(" | ")
    };

    format!(
        "Current AI landscape: {context}\n\n\
         Create a post that:\n\n\
         1. ADDRESSES TRENDING TOPICS: reference what people are discussing right now\n\
         2. USES YOUR AUTHENTIC VOICE: sound like the conversational mentor you are\n\
         3. SERVES YOUR AUDIENCE: help non-technical professionals feel confident about AI\n\
         4. INCLUDES PRACTICAL VALUE: give them something actionable or insightful\n\
         5. ENCOURAGES ENGAGEMENT: end with a question or invitation to discuss\n\n\
         POST REQUIREMENTS:\n\
         - Under 280 characters\n\
         - Include relevant hashtags (#ResponsibleAI, #AIEthics, etc.)\n\
         - Use one of your signature phrases naturally\n\
         - Sound authentically human and approachable\n\n\
         Post:"
    )
}

fn choose<'a, R: Rng>(items: &'a [String], rng: &mut R) -> Option<&'a str> {
    items.choose(rng).map(String::as_str)
}
