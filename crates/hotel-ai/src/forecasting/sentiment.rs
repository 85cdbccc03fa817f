use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keyword lexicon backing the review classifier.
///
/// Matching is whole-token and case-insensitive; the builtin lists cover
/// the vocabulary observed in guest reviews so far.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentLexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl SentimentLexicon {
    pub fn new(
        positive: impl IntoIterator<Item = String>,
        negative: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }

    pub fn builtin() -> Self {
        let positive = [
            "good",
            "great",
            "excellent",
            "amazing",
            "wonderful",
            "love",
            "best",
            "perfect",
            "clean",
            "friendly",
            "nice",
            "helpful",
        ];
        let negative = [
            "bad",
            "terrible",
            "awful",
            "horrible",
            "worst",
            "dirty",
            "rude",
            "slow",
            "noise",
            "noisy",
            "poor",
            "hate",
            "unpleasant",
        ];

        Self::new(
            positive.into_iter().map(str::to_string),
            negative.into_iter().map(str::to_string),
        )
    }
}

/// Deterministic keyword classifier for guest review text.
pub struct SentimentClassifier {
    lexicon: SentimentLexicon,
}

impl SentimentClassifier {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    /// Sum +1 per positive token and -1 per negative token; the sign of
    /// the total picks the label, zero reads as Neutral.
    pub fn classify(&self, text: &str) -> SentimentReading {
        let lowered = text.to_lowercase();
        let mut score: i32 = 0;

        for word in lowered.split_whitespace() {
            if self.lexicon.positive.contains(word) {
                score += 1;
            } else if self.lexicon.negative.contains(word) {
                score -= 1;
            }
        }

        let sentiment = match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };

        SentimentReading {
            sentiment,
            score: f64::from(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub sentiment: Sentiment,
    pub score: f64,
}
