//! Sentiment classification for exit-interview feedback.
//!
//! Default: `LexiconClassifier` — bag-of-words counting over two fixed word
//! lists (pure-Rust, fast, deterministic, fully testable). The trait seam
//! exists so a trained-model backend can be swapped in without touching
//! handler code; `AppState` holds an `Arc<dyn SentimentClassifier>`.

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Overall sentiment of a piece of feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// Words that count toward a positive reading. Matched whole-word only.
const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "enjoy",
    "happy",
    "satisfied",
    "appreciate",
    "thank",
    "thanks",
    "wonderful",
    "amazing",
    "fantastic",
    "pleasure",
];

/// Words that count toward a negative reading. Matched whole-word only.
const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "awful",
    "stress",
    "stressful",
    "difficult",
    "hard",
    "challenging",
    "issue",
    "problem",
    "concern",
    "disappoint",
];

/// The sentiment classifier seam. Implementations must be total: any string,
/// including the empty one, produces a label.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Whole-word lexicon counter. Whichever word list accumulates more hits wins;
/// ties (including no hits at all) read as neutral.
pub struct LexiconClassifier {
    positive: Vec<Regex>,
    negative: Vec<Regex>,
}

impl LexiconClassifier {
    /// Compiles the built-in vocabularies. Patterns are built once here, not
    /// per classification call.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            positive: compile_word_patterns(POSITIVE_WORDS)?,
            negative: compile_word_patterns(NEGATIVE_WORDS)?,
        })
    }

    fn count_matches(patterns: &[Regex], text: &str) -> usize {
        patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let positive = Self::count_matches(&self.positive, &lowered);
        let negative = Self::count_matches(&self.negative, &lowered);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Wraps each word in `\b` anchors so substrings embedded in longer words do
/// not count ("good" must not match inside "goodness").
fn compile_word_patterns(words: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    words
        .iter()
        .map(|word| Regex::new(&format!(r"\b{}\b", regex::escape(word))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> LexiconClassifier {
        LexiconClassifier::new().unwrap()
    }

    #[test]
    fn test_empty_text_is_neutral() {
        assert_eq!(classifier().classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_text_without_vocabulary_words_is_neutral() {
        let c = classifier();
        assert_eq!(
            c.classify("I am relocating to another city for family reasons."),
            Sentiment::Neutral
        );
    }

    #[test]
    fn test_more_positive_than_negative_reads_positive() {
        // positive count 2 vs negative count 1
        assert_eq!(classifier().classify("good good bad"), Sentiment::Positive);
    }

    #[test]
    fn test_more_negative_than_positive_reads_negative() {
        assert_eq!(
            classifier().classify("The deadlines were stressful and communication was poor."),
            Sentiment::Negative
        );
    }

    #[test]
    fn test_equal_counts_read_neutral() {
        assert_eq!(classifier().classify("good bad"), Sentiment::Neutral);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            classifier().classify("GREAT team, WONDERFUL culture"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_embedded_substring_does_not_count() {
        // "goodness" contains "good" but with no word boundary around it
        assert_eq!(classifier().classify("goodness"), Sentiment::Neutral);
        assert_eq!(classifier().classify("hardware"), Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_word_counts_every_occurrence() {
        // one "bad" vs three "good"
        assert_eq!(
            classifier().classify("bad, but good good good"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_mixed_feedback_scenario() {
        // great + appreciate (2) vs stressful (1) → positive
        let text = "The team was great and I appreciate the opportunity, \
                    though deadlines were stressful";
        assert_eq!(classifier().classify(text), Sentiment::Positive);
    }

    #[test]
    fn test_punctuation_provides_word_boundaries() {
        assert_eq!(classifier().classify("Thanks!"), Sentiment::Positive);
        assert_eq!(classifier().classify("(problem)"), Sentiment::Negative);
    }

    #[test]
    fn test_sentiment_serializes_snake_case() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, r#""positive""#);
        let back: Sentiment = serde_json::from_str(r#""neutral""#).unwrap();
        assert_eq!(back, Sentiment::Neutral);
    }

    #[test]
    fn test_display_labels_are_lowercase() {
        assert_eq!(Sentiment::Negative.to_string(), "negative");
    }
}
