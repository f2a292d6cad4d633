//! Word lists that passphrase words are drawn from.
//!
//! A [WordCorpus] holds a shared pointer to an immutable
//! [Words] list. Generation takes a snapshot of the pointer so
//! a concurrent replacement is either seen in full or not at all.
use crate::{entropy::EntropyBreakdown, Error, Result};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

const EMBEDDED: &str = include_str!("wordlists/basic.txt");

static CORPUS: LazyLock<WordCorpus> = LazyLock::new(WordCorpus::embedded);

/// Process-wide word corpus, initialized with the embedded list.
pub fn corpus() -> &'static WordCorpus {
    &CORPUS
}

/// Ordered list of candidate words.
///
/// Always contains at least one non-empty word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Words(Vec<String>);

impl Words {
    /// Create a word list.
    ///
    /// Words are trimmed and blank entries are skipped; an error
    /// is returned when nothing remains.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_owned())
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(Self(words))
    }

    /// Parse a newline-delimited word list.
    ///
    /// The last whitespace-separated token of each line is the
    /// word so dice index columns (`11111 abacus`) are discarded.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(
            text.lines()
                .filter_map(|line| line.split_whitespace().last()),
        )
    }

    /// The embedded default word list.
    pub fn embedded() -> Self {
        Self(
            EMBEDDED
                .lines()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty; never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Word at an index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Whether the list contains a word.
    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    /// Iterator of the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Bits of entropy contributed by each uniformly chosen word.
    pub fn bits_per_word(&self) -> f64 {
        crate::entropy::bits_per_word(self.len())
    }
}

/// Swappable word list shared by generators.
#[derive(Debug)]
pub struct WordCorpus {
    current: RwLock<Arc<Words>>,
}

impl WordCorpus {
    /// Create a corpus from a word list.
    pub fn new(words: Words) -> Self {
        Self {
            current: RwLock::new(Arc::new(words)),
        }
    }

    /// Create a corpus using the embedded word list.
    pub fn embedded() -> Self {
        Self::new(Words::embedded())
    }

    /// Current word list.
    ///
    /// The snapshot stays valid if the corpus is replaced
    /// while it is in use.
    pub fn snapshot(&self) -> Arc<Words> {
        Arc::clone(&*self.current.read())
    }

    /// Number of words in the current list.
    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    /// Whether the current list is empty; never true.
    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }

    /// Swap in a new word list returning the previous list.
    pub fn replace(&self, words: Words) -> Arc<Words> {
        let words = Arc::new(words);
        let previous = std::mem::replace(&mut *self.current.write(), words);
        tracing::info!(
            previous = %previous.len(),
            current = %self.len(),
            "corpus::replace",
        );
        previous
    }

    /// Replace the word list from raw entries.
    ///
    /// When no usable words remain the current list is retained
    /// and `false` is returned.
    pub fn replace_list<I, S>(&self, list: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match Words::new(list) {
            Ok(words) => {
                self.replace(words);
                true
            }
            Err(_) => false,
        }
    }

    /// Entropy breakdown for a word count against the current list.
    pub fn breakdown(
        &self,
        word_count: usize,
        symbols_enabled: bool,
        symbol_set_size: usize,
    ) -> EntropyBreakdown {
        EntropyBreakdown::new(
            word_count,
            symbols_enabled,
            symbol_set_size,
            self.len(),
        )
    }

    /// Estimated bits of entropy for a word count against the
    /// current list.
    pub fn estimate(
        &self,
        word_count: usize,
        symbols_enabled: bool,
        symbol_set_size: usize,
    ) -> f64 {
        self.breakdown(word_count, symbols_enabled, symbol_set_size)
            .total
    }
}

impl Default for WordCorpus {
    fn default() -> Self {
        Self::embedded()
    }
}
