//! Word selection and the mutations applied to passphrase words.
//!
//! Stages always run in the same order: pick words, normalize
//! case and capitalize, append digits, then affix symbols when
//! enabled. Mutations only ever touch the start or end of a word.
use crate::{corpus::Words, random::UniformSource};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// Where a symbol is affixed to a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Before the first character.
    Start,
    /// After the last character.
    End,
}

/// Digits appended to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitSuffix {
    /// Word position.
    pub position: usize,
    /// Appended digits, one or two of them.
    pub digits: String,
}

/// Symbol affixed to a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolAffix {
    /// Word position.
    pub position: usize,
    /// The symbol.
    pub symbol: char,
    /// Which end of the word received the symbol.
    pub placement: Placement,
}

/// Random choices applied to one candidate passphrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationPolicy {
    /// Positions of capitalized words.
    pub capitalized: Vec<usize>,
    /// Digit suffixes.
    pub digits: Vec<DigitSuffix>,
    /// Symbol affixes, empty when symbols are disabled.
    pub symbols: Vec<SymbolAffix>,
}

impl MutationPolicy {
    /// Number of capitalized words.
    pub fn capitalize_count(&self) -> usize {
        self.capitalized.len()
    }

    /// Number of words that received digits.
    pub fn digit_targets(&self) -> usize {
        self.digits.len()
    }

    /// Number of words that received a symbol.
    pub fn symbol_targets(&self) -> usize {
        self.symbols.len()
    }

    /// Whether symbols were applied.
    pub fn symbols_enabled(&self) -> bool {
        !self.symbols.is_empty()
    }
}

/// Words of a candidate passphrase and the mutations applied.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Mutated words.
    pub words: Vec<String>,
    /// Applied mutations.
    pub policy: MutationPolicy,
}

impl Candidate {
    /// Join the words with a separator.
    pub fn join(&self, separator: &str) -> String {
        self.words.join(separator)
    }
}

/// Number of mutation targets: one or two, capped by the word count.
fn target_count<R>(source: &mut UniformSource<R>, len: usize) -> usize
where
    R: RngCore + CryptoRng,
{
    1 + source.index(len.min(2))
}

/// Draw `count` words from the list, duplicates allowed.
pub fn pick_words<R>(
    source: &mut UniformSource<R>,
    words: &Words,
    count: usize,
) -> Vec<String>
where
    R: RngCore + CryptoRng,
{
    (0..count)
        .filter_map(|_| words.get(source.index(words.len())))
        .map(String::from)
        .collect()
}

/// Lowercase every word then capitalize the first letter of
/// one or two of them.
pub fn normalize_and_capitalize<R>(
    source: &mut UniformSource<R>,
    words: &mut [String],
) -> Vec<usize>
where
    R: RngCore + CryptoRng,
{
    for word in words.iter_mut() {
        *word = word.to_lowercase();
    }
    if words.is_empty() {
        return Vec::new();
    }

    let count = target_count(source, words.len());
    let chosen = source.distinct_positions(words.len(), count);
    for &position in &chosen {
        let word = &mut words[position];
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            *word = first.to_uppercase().chain(chars).collect();
        }
    }
    chosen
}

/// Append one or two digits to the end of one or two words.
pub fn append_digits<R>(
    source: &mut UniformSource<R>,
    words: &mut [String],
) -> Vec<DigitSuffix>
where
    R: RngCore + CryptoRng,
{
    if words.is_empty() {
        return Vec::new();
    }

    let count = target_count(source, words.len());
    let chosen = source.distinct_positions(words.len(), count);
    let mut suffixes = Vec::with_capacity(chosen.len());
    for position in chosen {
        let digit_count = 1 + source.index(2);
        let digits: String = (0..digit_count).map(|_| source.digit()).collect();
        words[position].push_str(&digits);
        suffixes.push(DigitSuffix { position, digits });
    }
    suffixes
}

/// Affix a single symbol to the start or end of one or two words.
///
/// Targets are drawn independently of the digit targets so the
/// same word may receive both.
pub fn append_symbol<R>(
    source: &mut UniformSource<R>,
    words: &mut [String],
    symbols: &[char],
) -> Vec<SymbolAffix>
where
    R: RngCore + CryptoRng,
{
    if words.is_empty() || symbols.is_empty() {
        return Vec::new();
    }

    let count = target_count(source, words.len());
    let chosen = source.distinct_positions(words.len(), count);
    let mut affixes = Vec::with_capacity(chosen.len());
    for position in chosen {
        let symbol = symbols[source.index(symbols.len())];
        let placement = if source.coin() {
            Placement::Start
        } else {
            Placement::End
        };
        let word = &mut words[position];
        match placement {
            Placement::Start => word.insert(0, symbol),
            Placement::End => word.push(symbol),
        }
        affixes.push(SymbolAffix {
            position,
            symbol,
            placement,
        });
    }
    affixes
}

/// Run every stage of the pipeline for `count` words.
pub fn mutate<R>(
    source: &mut UniformSource<R>,
    words: &Words,
    count: usize,
    symbols: Option<&[char]>,
) -> Candidate
where
    R: RngCore + CryptoRng,
{
    let mut picked = pick_words(source, words, count);
    let capitalized = normalize_and_capitalize(source, &mut picked);
    let digits = append_digits(source, &mut picked);
    let symbols = symbols
        .map(|symbols| append_symbol(source, &mut picked, symbols))
        .unwrap_or_default();
    Candidate {
        words: picked,
        policy: MutationPolicy {
            capitalized,
            digits,
            symbols,
        },
    }
}
