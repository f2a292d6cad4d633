//! Passphrase generation under an optional length limit.
//!
//! Without a limit a single candidate is produced. With a limit
//! a bounded search walks word counts from the requested count
//! down to one and keeps the first candidate that fits; when the
//! search comes up empty the caller falls back to an
//! unconstrained candidate at the requested count.
use crate::{
    corpus::{WordCorpus, Words},
    csprng,
    entropy::EntropyBreakdown,
    mutation::{mutate, MutationPolicy},
    random::UniformSource,
    DEFAULT_SEPARATOR, DEFAULT_WORDS, MAX_ATTEMPTS, MAX_WORDS, MIN_WORDS,
    SYMBOLS,
};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};

/// Clamp a word count to the supported range.
pub fn clamp_word_count(word_count: usize) -> usize {
    word_count.clamp(MIN_WORDS, MAX_WORDS)
}

/// Leading integer of user input.
///
/// Leading whitespace is skipped and an optional sign is
/// accepted; parsing stops at the first non-digit so `"9.5"`
/// reads as 9 and `"7 words"` as 7. Values too large for an
/// `i64` saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_owned()
    };
    Some(signed.parse::<i64>().unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Word count for an integer taken from user input or
/// saved settings.
///
/// Zero falls back to the default count, negative values give
/// the minimum and anything else is clamped.
pub fn normalize_word_count(value: i64) -> usize {
    match value {
        0 => DEFAULT_WORDS,
        value if value < 0 => MIN_WORDS,
        value => {
            clamp_word_count(usize::try_from(value).unwrap_or(MAX_WORDS))
        }
    }
}

/// Parse a word count from user input.
///
/// Input without a leading integer falls back to the default
/// count, otherwise [normalize_word_count] applies.
pub fn parse_word_count(input: &str) -> usize {
    parse_leading_int(input)
        .map(normalize_word_count)
        .unwrap_or(DEFAULT_WORDS)
}

/// Options for generating a passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Number of words.
    pub word_count: usize,
    /// String placed between words.
    pub separator: String,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Whether symbols are affixed to words.
    pub symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORDS,
            separator: DEFAULT_SEPARATOR.to_owned(),
            max_length: None,
            symbols: false,
        }
    }
}

impl GenerationRequest {
    /// Create a request for a number of words.
    ///
    /// The word count is clamped to the supported range.
    pub fn new(word_count: usize) -> Self {
        Self {
            word_count: clamp_word_count(word_count),
            ..Default::default()
        }
    }

    /// Set the separator, an empty separator uses the default.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separator = if separator.is_empty() {
            DEFAULT_SEPARATOR.to_owned()
        } else {
            separator
        };
        self
    }

    /// Set the maximum length, zero disables the limit.
    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length.filter(|max| *max > 0);
        self
    }

    /// Enable or disable symbols.
    pub fn symbols(mut self, symbols: bool) -> Self {
        self.symbols = symbols;
        self
    }

    /// Copy of this request with every field corrected.
    pub fn normalized(&self) -> Self {
        Self::new(self.word_count)
            .separator(self.separator.clone())
            .max_length(self.max_length)
            .symbols(self.symbols)
    }
}

/// Generated passphrase.
#[derive(Debug)]
pub struct GenerationResult {
    /// The passphrase.
    pub passphrase: SecretString,
    /// Number of words in the passphrase.
    pub used_word_count: usize,
    /// Number of words that were requested.
    pub requested_word_count: usize,
    /// Length limit that was requested.
    pub max_length: Option<usize>,
    /// Mutations applied to the words.
    pub policy: MutationPolicy,
    /// Size of the word list the words were drawn from.
    pub list_size: usize,
    /// Size of the symbol set when symbols were enabled.
    pub symbol_set_size: Option<usize>,
}

impl GenerationResult {
    /// Length of the passphrase in characters.
    pub fn len(&self) -> usize {
        self.passphrase.expose_secret().chars().count()
    }

    /// Whether the passphrase is empty.
    pub fn is_empty(&self) -> bool {
        self.passphrase.expose_secret().is_empty()
    }

    /// Whether fewer words than requested were used to meet
    /// the length limit.
    pub fn reduced(&self) -> bool {
        self.max_length.is_some()
            && self.used_word_count != self.requested_word_count
    }

    /// Whether the passphrase honors the requested length limit.
    pub fn within_limit(&self) -> bool {
        self.max_length.map(|max| self.len() <= max).unwrap_or(true)
    }

    /// Entropy breakdown for the words actually used.
    pub fn breakdown(&self) -> EntropyBreakdown {
        EntropyBreakdown::new(
            self.used_word_count,
            self.symbol_set_size.is_some(),
            self.symbol_set_size.unwrap_or_default(),
            self.list_size,
        )
    }

    /// One line summary of length, words and strength.
    pub fn summary(&self) -> String {
        let breakdown = self.breakdown();
        let suffix = if self.reduced() {
            format!(" (reduced from {} words)", self.requested_word_count)
        } else {
            String::new()
        };
        format!(
            "{} characters · {} words{} · {} bits ({})",
            self.len(),
            self.used_word_count,
            suffix,
            breakdown.total.round(),
            breakdown.strength(),
        )
    }
}

/// Generates passphrases from a word corpus.
pub struct PassphraseGenerator<'c, R> {
    corpus: &'c WordCorpus,
    source: UniformSource<R>,
    symbols: Vec<char>,
}

impl<'c> PassphraseGenerator<'c, OsRng> {
    /// Create a generator using the operating system RNG.
    pub fn new(corpus: &'c WordCorpus) -> Self {
        Self::with_rng(corpus, csprng())
    }
}

impl<'c, R> PassphraseGenerator<'c, R>
where
    R: RngCore + CryptoRng,
{
    /// Create a generator using the given RNG.
    pub fn with_rng(corpus: &'c WordCorpus, rng: R) -> Self {
        Self {
            corpus,
            source: UniformSource::new(rng),
            symbols: SYMBOLS.to_vec(),
        }
    }

    /// Use a different symbol set.
    ///
    /// An empty set keeps the default symbols.
    pub fn with_symbols(mut self, symbols: &[char]) -> Self {
        if !symbols.is_empty() {
            self.symbols = symbols.to_vec();
        }
        self
    }

    /// Number of symbols that may be affixed.
    pub fn symbol_set_size(&self) -> usize {
        self.symbols.len()
    }

    /// Generate a passphrase.
    ///
    /// When a length limit cannot be met for any word count the
    /// passphrase is generated without the limit; use
    /// [GenerationResult::within_limit] when strict enforcement
    /// matters.
    pub fn generate(&mut self, request: &GenerationRequest) -> GenerationResult {
        let request = request.normalized();
        let words = self.corpus.snapshot();
        if let Some(max_length) = request.max_length {
            if let Some(result) = self.search(&words, &request, max_length) {
                return result;
            }
            tracing::debug!(
                max_length = %max_length,
                word_count = %request.word_count,
                "generator::fallback",
            );
        }
        self.unconstrained(&words, &request)
    }

    /// Search for a passphrase no longer than `max_length`.
    ///
    /// Word counts are tried from the requested count down to one
    /// with a bounded number of candidates per count.
    pub fn search(
        &mut self,
        words: &Words,
        request: &GenerationRequest,
        max_length: usize,
    ) -> Option<GenerationResult> {
        for word_count in (MIN_WORDS..=request.word_count).rev() {
            for _ in 0..MAX_ATTEMPTS {
                let result = self.candidate(words, request, word_count);
                if result.len() <= max_length {
                    return Some(result);
                }
            }
            tracing::debug!(
                word_count = %word_count,
                max_length = %max_length,
                "generator::search",
            );
        }
        None
    }

    /// Single candidate at the requested word count.
    pub fn unconstrained(
        &mut self,
        words: &Words,
        request: &GenerationRequest,
    ) -> GenerationResult {
        self.candidate(words, request, request.word_count)
    }

    fn candidate(
        &mut self,
        words: &Words,
        request: &GenerationRequest,
        word_count: usize,
    ) -> GenerationResult {
        let symbols = request.symbols.then_some(self.symbols.as_slice());
        let candidate = mutate(&mut self.source, words, word_count, symbols);
        let passphrase = candidate.join(&request.separator);
        GenerationResult {
            passphrase: SecretString::new(passphrase.into()),
            used_word_count: word_count,
            requested_word_count: request.word_count,
            max_length: request.max_length,
            policy: candidate.policy,
            list_size: words.len(),
            symbol_set_size: symbols.map(|s| s.len()),
        }
    }
}
