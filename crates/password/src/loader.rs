//! Load a replacement word list from disc.
//!
//! The load runs at most once per loader; concurrent callers
//! wait on the same in-flight load and later callers observe
//! its outcome.
use crate::{
    corpus::{WordCorpus, Words},
    Result,
};
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

/// Memoized loader for a newline-delimited word list.
#[derive(Debug)]
pub struct CorpusLoader {
    path: PathBuf,
    loaded: OnceCell<bool>,
}

impl CorpusLoader {
    /// Create a loader for a word list file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            loaded: OnceCell::new(),
        }
    }

    /// Path to the word list file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a load completed and replaced the corpus.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().copied().unwrap_or(false)
    }

    /// Load the word list into the corpus.
    ///
    /// The corpus is only replaced when the file could be read
    /// and contains at least one word; failures are logged and
    /// leave the current list in place.
    pub async fn load(&self, corpus: &WordCorpus) -> bool {
        *self
            .loaded
            .get_or_init(|| async {
                match read_words(&self.path).await {
                    Ok(words) => {
                        tracing::info!(
                            path = %self.path.display(),
                            words = %words.len(),
                            "loaded word list",
                        );
                        corpus.replace(words);
                        true
                    }
                    Err(error) => {
                        tracing::warn!(
                            path = %self.path.display(),
                            error = %error,
                            "could not load word list, using current list",
                        );
                        false
                    }
                }
            })
            .await
    }
}

/// Read and parse a word list file.
pub async fn read_words(path: impl AsRef<Path>) -> Result<Words> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    Words::parse(&text)
}
