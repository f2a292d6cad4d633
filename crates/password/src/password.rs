//! Fixed-length random passwords drawn from character classes.
use crate::{
    csprng, random::UniformSource, Error, Result, DIGITS, SYMBOLS,
};
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};
use zxcvbn::{zxcvbn, Entropy};

const ROMAN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const ROMAN_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Measure the entropy in a password by pattern matching.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Generated password result.
#[derive(Debug)]
pub struct PasswordResult {
    /// The generated password.
    pub password: SecretString,
    /// Bits of entropy from the size of the character pool.
    pub bits: f64,
    /// Pattern based entropy measurement.
    pub entropy: Entropy,
}

impl PasswordResult {
    /// Bits of entropy estimated by the pattern matcher.
    pub fn measured_bits(&self) -> f64 {
        self.entropy.guesses_log10() * 10f64.log2()
    }
}

/// Options for fixed-length password generation.
#[derive(Debug, Clone)]
pub struct PasswordBuilder {
    length: usize,
    characters: Vec<char>,
}

impl PasswordBuilder {
    /// Create a new password builder without any character classes.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            characters: vec![],
        }
    }

    /// Create with lowercase and uppercase character sets.
    pub fn new_alpha(length: usize) -> Self {
        Self::new(length).upper().lower()
    }

    /// Create with numeric digits only.
    pub fn new_numeric(length: usize) -> Self {
        Self::new(length).numeric()
    }

    /// Create with numeric digits, uppercase and lowercase
    /// roman letters.
    pub fn new_alpha_numeric(length: usize) -> Self {
        Self::new(length).upper().lower().numeric()
    }

    /// Create with letters, digits and symbols.
    pub fn new_printable(length: usize) -> Self {
        Self::new(length).upper().lower().numeric().symbols()
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this builder is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct characters that may be drawn.
    pub fn pool_size(&self) -> usize {
        self.characters.len()
    }

    /// Use lowercase roman letters.
    pub fn lower(self) -> Self {
        self.extend(ROMAN_LOWER.chars())
    }

    /// Use uppercase roman letters.
    pub fn upper(self) -> Self {
        self.extend(ROMAN_UPPER.chars())
    }

    /// Use numeric digits.
    pub fn numeric(self) -> Self {
        self.extend(DIGITS.iter().copied())
    }

    /// Use the passphrase symbol set.
    pub fn symbols(self) -> Self {
        self.extend(SYMBOLS.iter().copied())
    }

    fn extend(mut self, chars: impl Iterator<Item = char>) -> Self {
        for c in chars {
            if !self.characters.contains(&c) {
                self.characters.push(c);
            }
        }
        self
    }

    /// Bits of entropy for the length and character pool.
    pub fn bits(&self) -> f64 {
        if self.characters.is_empty() {
            0.0
        } else {
            self.length as f64 * (self.characters.len() as f64).log2()
        }
    }

    /// Generate a random password.
    pub fn one(&self) -> Result<PasswordResult> {
        self.one_with(&mut UniformSource::new(csprng()))
    }

    /// Generate a random password using the given source.
    pub fn one_with<R>(
        &self,
        source: &mut UniformSource<R>,
    ) -> Result<PasswordResult>
    where
        R: RngCore + CryptoRng,
    {
        if self.length == 0 {
            return Err(Error::ZeroLength);
        }
        if self.characters.is_empty() {
            return Err(Error::NoCharacters);
        }

        let password: String = (0..self.length)
            .map(|_| self.characters[source.index(self.characters.len())])
            .collect();
        let password = SecretString::new(password.into());
        let entropy = measure_entropy(password.expose_secret(), &[]);
        Ok(PasswordResult {
            password,
            bits: self.bits(),
            entropy,
        })
    }

    /// Generate multiple passwords.
    pub fn many(&self, count: usize) -> Result<Vec<PasswordResult>> {
        let mut source = UniformSource::new(csprng());
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(self.one_with(&mut source)?);
        }
        Ok(results)
    }
}
