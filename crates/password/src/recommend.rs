//! Suggestions for reaching the next strength bucket.
use crate::entropy::{EntropyBreakdown, Strength};
use serde::Serialize;
use std::fmt;

/// Advice derived from an entropy breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Recommendation {
    /// Already in the strongest bucket.
    Sufficient,
    /// The word list is too small for words to add entropy.
    GrowWordlist,
    /// The next threshold has already been reached.
    MeetsThreshold {
        /// Current bucket.
        strength: Strength,
    },
    /// More words are needed to reach the next threshold.
    AddWords {
        /// Number of additional words.
        words: u32,
        /// Bucket the additional words reach.
        target: Strength,
    },
}

impl Recommendation {
    /// Recommendation for a breakdown.
    pub fn new(breakdown: &EntropyBreakdown) -> Self {
        let bits = breakdown.total;
        let current = Strength::from_bits(bits);
        let Some(target) = current.next() else {
            return Self::Sufficient;
        };

        let bits_per_word = breakdown.bits_per_word();
        if bits_per_word <= 0.0 {
            return Self::GrowWordlist;
        }

        let needed = ((target.threshold() - bits) / bits_per_word).ceil();
        if needed <= 0.0 {
            Self::MeetsThreshold { strength: current }
        } else {
            Self::AddWords {
                words: needed as u32,
                target,
            }
        }
    }
}

impl From<&EntropyBreakdown> for Recommendation {
    fn from(value: &EntropyBreakdown) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sufficient => write!(f, "Excellent, sufficient entropy."),
            Self::GrowWordlist => {
                write!(f, "Increase wordlist size or add more words.")
            }
            Self::MeetsThreshold { strength } => {
                write!(f, "Meets {} threshold.", strength)
            }
            Self::AddWords { words, target } => {
                let noun = if *words == 1 { "word" } else { "words" };
                write!(
                    f,
                    "Add {} {} (or increase digits/caps) to approach {} bits ({}).",
                    words,
                    noun,
                    target.threshold(),
                    target,
                )
            }
        }
    }
}
