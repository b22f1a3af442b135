use std::collections::HashMap;

use bw_core::Article;

use crate::relevance::AI_VOCABULARY;

/// Topics kept in the trending list even at low observed frequency.
pub const ANCHOR_TOPICS: &[&str] = &["responsible AI", "AI ethics", "AI bias", "AI governance"];

const MAX_TOPICS: usize = 5;

/// Collapse keyword synonyms into one canonical topic label.
///
/// Unmapped keywords pass through unchanged.
pub fn normalize_topic(keyword: &str) -> String {
    match keyword.to_lowercase().as_str() {
        "artificial intelligence" => "AI",
        "ml" => "machine learning",
        "bias" | "ai bias" | "algorithmic bias" => "AI bias",
        "ethics" | "ai ethics" => "AI ethics",
        "governance" | "ai governance" => "AI governance",
        "responsible ai" => "responsible AI",
        "ai regulation" => "AI regulation",
        "ai policy" => "AI policy",
        "ai safety" => "AI safety",
        "ai transparency" => "AI transparency",
        "neural network" => "neural networks",
        _ => keyword,
    }
    .to_string()
}

/// Derive at most five trending topics from a batch of triaged articles.
///
/// A topic stays in the list when it appears in at least two articles, or
/// when it belongs to the anchor set.
pub fn trending_topics(articles: &[Article]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for article in articles {
        let text = format!("{} {}", article.title, article.summary).to_lowercase();
        for keyword in AI_VOCABULARY {
            if text.contains(keyword) {
                *counts.entry(normalize_topic(keyword)).or_insert(0) += 1;
            }
        }
    }

    let mut topics: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|(label, count)| *count >= 2 || is_anchor(label))
        .collect();

    // Ties go to anchors, then lexicographic order for a stable list.
    topics.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| is_anchor(&b.0).cmp(&is_anchor(&a.0)))
            .then_with(|| a.0.cmp(&b.0))
    });
    topics.truncate(MAX_TOPICS);
    topics.into_iter().map(|(label, _)| label).collect()
}

fn is_anchor(label: &str) -> bool {
    ANCHOR_TOPICS.contains(&label)
}
