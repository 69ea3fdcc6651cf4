use std::collections::HashSet;
use std::sync::OnceLock;

/// Frequent English words, mostly drawn from news prose.
pub const COMMON_WORDS: &[&str] = &[
    "the", "of", "and", "to", "in", "a", "that", "is", "was", "for", "on", "as", "with", "by",
    "at", "from", "it", "be", "an", "this", "are", "or", "have", "has", "not", "were", "which",
    "but", "they", "he", "she", "we", "you", "their", "its", "more", "about", "new", "year",
    "percent", "two", "three", "first", "last", "after", "before", "between", "during",
    "against", "over", "market", "price", "company", "government", "report", "people",
    "states", "united", "china", "india", "global", "growth", "policy", "economic", "health",
    "research", "university", "technology", "international", "security", "police", "court",
    "team", "game", "season", "city", "state", "country", "world", "officials", "president",
    "minister", "prime", "election", "party", "parliament", "law", "rights", "trade", "bank",
    "investors", "shares", "billion", "million", "dollars", "euro", "oil", "energy", "climate",
    "change", "cases", "covid", "vaccine", "study", "data", "analysis", "chief", "director",
    "announce", "statement", "according", "including", "however", "while", "because", "since",
    "although", "could", "would", "should", "may", "might", "will", "can", "said", "says",
    "told", "added", "include", "make", "made", "under", "into", "out", "back", "down", "up",
    "across", "through", "today", "yesterday", "monday", "tuesday", "wednesday", "thursday",
    "friday", "saturday", "sunday",
];

fn vocabulary() -> &'static HashSet<&'static str> {
    static VOCAB: OnceLock<HashSet<&'static str>> = OnceLock::new();
    VOCAB.get_or_init(|| COMMON_WORDS.iter().copied().collect())
}

/// Fraction of alphabetic tokens in `text` that are common English words.
/// Returns 0.0 when the text has no tokens.
pub fn word_coverage(text: &str) -> f64 {
    let vocab = vocabulary();
    let mut total = 0usize;
    let mut hits = 0usize;
    for token in text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|t| !t.is_empty())
    {
        total += 1;
        if vocab.contains(token.to_ascii_lowercase().as_str()) {
            hits += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    hits as f64 / total as f64
}
