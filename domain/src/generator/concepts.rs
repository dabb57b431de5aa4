//! Phrase extraction: pull up to three salient phrases out of a title.
//!
//! Words survive the stop-word/length filter, then consecutive survivors
//! are grouped into phrases. A phrase closes at the end of the title or at
//! a concept boundary between two adjacent words.

/// Words that never carry a concept.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// A word of one of these kinds ends the phrase it appears in.
const PHRASE_CLOSERS: &[&str] = &[
    "analysis",
    "study",
    "research",
    "design",
    "implementation",
    "evaluation",
    "comparison",
];

/// A following word of one of these kinds starts a new phrase.
const METHOD_WORDS: &[&str] = &["using", "through", "via", "with", "by"];

/// Both adjacent words longer than this are treated as separate concepts.
const LONG_WORD_LEN: usize = 6;

/// Extract up to 3 phrases from the title, original casing preserved,
/// first-found-first. Empty and whitespace-only titles yield an empty list.
pub fn extract_main_concepts(title: &str) -> Vec<String> {
    let words: Vec<&str> = title
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .collect();

    let mut concepts = Vec::new();
    let mut current_phrase: Vec<&str> = Vec::new();

    for (i, word) in words.iter().copied().enumerate() {
        current_phrase.push(word);

        let closes = match words.get(i + 1) {
            None => true,
            Some(next) => is_concept_boundary(word, next),
        };

        if closes && !current_phrase.is_empty() {
            concepts.push(current_phrase.join(" "));
            current_phrase.clear();
        }
    }

    concepts.truncate(3);
    concepts
}

/// Whether a phrase boundary falls between two adjacent surviving words.
fn is_concept_boundary(word: &str, next_word: &str) -> bool {
    PHRASE_CLOSERS.contains(&word.to_lowercase().as_str())
        || METHOD_WORDS.contains(&next_word.to_lowercase().as_str())
        || (word.len() > LONG_WORD_LEN && next_word.len() > LONG_WORD_LEN)
}
