//! Memorable passphrase and random password generation
//! with closed-form entropy estimates.
//!
//! Passphrases are drawn from a swappable [WordCorpus] and
//! mutated with capitalization, digit suffixes and optional
//! symbol affixes; the [entropy] module scores the exact
//! mutation policy the generator applies.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod corpus;
pub mod entropy;
mod error;
pub mod generator;
pub mod loader;
pub mod mutation;
pub mod password;
pub mod random;
pub mod recommend;

pub use corpus::{corpus, WordCorpus, Words};
pub use entropy::{EntropyBreakdown, Strength};
pub use error::Error;
pub use generator::{
    GenerationRequest, GenerationResult, PassphraseGenerator,
};
pub use loader::CorpusLoader;
pub use mutation::{MutationPolicy, Placement};
pub use password::{PasswordBuilder, PasswordResult};
pub use random::UniformSource;
pub use recommend::Recommendation;

pub use zxcvbn;

/// Default cryptographically secure RNG.
pub fn csprng() -> rand::rngs::OsRng {
    rand::rngs::OsRng
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Smallest number of words in a passphrase.
pub const MIN_WORDS: usize = 1;

/// Largest number of words in a passphrase.
pub const MAX_WORDS: usize = 12;

/// Number of words used when none is given.
pub const DEFAULT_WORDS: usize = 4;

/// Separator used when none is given.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Candidates tried per word count when a length limit is set.
pub const MAX_ATTEMPTS: usize = 300;

/// Numerical digits.
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Symbols that may be affixed to passphrase words.
///
/// Quotes, backslash and angle brackets are excluded so the
/// output survives shells, HTML and most form fields.
pub const SYMBOLS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '?', '~', '-', '_', '+', '=',
    ':', ';', ',', '.', '/',
];
