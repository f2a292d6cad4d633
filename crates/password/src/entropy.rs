//! Closed-form entropy estimates for generated passphrases.
//!
//! The model mirrors the random choices made by the
//! [mutation](crate::mutation) pipeline and treats each stage
//! as independent, which approximates rather than computes the
//! joint entropy of the output.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expected number of digits appended to each digit target.
const DIGITS_PER_TARGET: f64 = 1.5;

/// Number of distinct decimal digits.
const DIGIT_CHOICES: f64 = 10.0;

/// Bits contributed by a word chosen uniformly from a list.
///
/// Lists with fewer than two words contribute nothing.
pub fn bits_per_word(list_size: usize) -> f64 {
    (list_size.max(1) as f64).log2()
}

/// Estimated bits of entropy for a passphrase.
pub fn estimate_entropy(
    word_count: usize,
    symbols_enabled: bool,
    symbol_set_size: usize,
    list_size: usize,
) -> f64 {
    EntropyBreakdown::new(
        word_count,
        symbols_enabled,
        symbol_set_size,
        list_size,
    )
    .total
}

/// Number of ways to choose `k` positions out of `n`.
fn combinations(n: usize, k: usize) -> f64 {
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Expected number of mutation targets for a word count.
///
/// One or two targets are drawn uniformly, collapsing to a
/// single target when there is only one word.
fn targets_average(word_count: usize) -> f64 {
    if word_count == 1 {
        1.0
    } else {
        1.5
    }
}

/// Entropy contributions by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyBreakdown {
    /// Bits from the choice of words.
    pub words_bits: f64,
    /// Bits from which words were capitalized.
    pub cap_bits: f64,
    /// Bits from appended digits.
    pub digits_bits: f64,
    /// Bits from affixed symbols.
    pub symbols_bits: f64,
    /// Sum of all contributions.
    pub total: f64,
    /// Size of the word list the words were drawn from.
    pub list_size: usize,
}

impl EntropyBreakdown {
    /// Compute the breakdown for a passphrase of `word_count` words.
    pub fn new(
        word_count: usize,
        symbols_enabled: bool,
        symbol_set_size: usize,
        list_size: usize,
    ) -> Self {
        let list_size = list_size.max(1);
        let words_bits = word_count as f64 * bits_per_word(list_size);

        let max_caps = word_count.min(2);
        let cap_choices: f64 =
            (1..=max_caps).map(|k| combinations(word_count, k)).sum();
        let cap_bits = if cap_choices > 1.0 {
            cap_choices.log2()
        } else {
            0.0
        };

        let targets = targets_average(word_count);
        let digits_bits = targets * DIGITS_PER_TARGET * DIGIT_CHOICES.log2();

        let symbols_bits = if symbols_enabled {
            targets * (symbol_set_size.max(2) as f64).log2()
        } else {
            0.0
        };

        Self {
            words_bits,
            cap_bits,
            digits_bits,
            symbols_bits,
            total: words_bits + cap_bits + digits_bits + symbols_bits,
            list_size,
        }
    }

    /// Bits contributed by each word of the list.
    pub fn bits_per_word(&self) -> f64 {
        bits_per_word(self.list_size)
    }

    /// Strength label for the total.
    pub fn strength(&self) -> Strength {
        Strength::from_bits(self.total)
    }
}

/// Coarse strength bucket for a number of bits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    /// Below 48 bits.
    Weak,
    /// At least 48 bits.
    Moderate,
    /// At least 64 bits.
    Strong,
    /// At least 80 bits.
    VeryStrong,
}

impl Strength {
    /// Bucket for a number of bits.
    pub fn from_bits(bits: f64) -> Self {
        if bits >= Self::VeryStrong.threshold() {
            Self::VeryStrong
        } else if bits >= Self::Strong.threshold() {
            Self::Strong
        } else if bits >= Self::Moderate.threshold() {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Minimum number of bits for this bucket.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Weak => 0.0,
            Self::Moderate => 48.0,
            Self::Strong => 64.0,
            Self::VeryStrong => 80.0,
        }
    }

    /// The next stronger bucket.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Weak => Some(Self::Moderate),
            Self::Moderate => Some(Self::Strong),
            Self::Strong => Some(Self::VeryStrong),
            Self::VeryStrong => None,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
