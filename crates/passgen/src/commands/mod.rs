use crate::Result;
use passgen_password::{corpus, CorpusLoader, WordCorpus};
use passgen_preferences::{FileStorage, Settings, SettingsStore};
use std::path::{Path, PathBuf};
use tokio::sync::OnceCell;

pub mod entropy;
pub mod password;
pub mod phrase;
pub mod settings;

pub use entropy::EntropyArgs;
pub use password::PasswordArgs;
pub use phrase::PhraseArgs;
pub use settings::Command as SettingsCommand;

/// Settings file and the store backed by it.
struct SettingsFile {
    path: PathBuf,
    store: SettingsStore,
}

/// State shared by the commands.
///
/// The settings file is only located when a command first
/// needs it.
pub struct Context {
    settings_override: Option<PathBuf>,
    settings_file: OnceCell<SettingsFile>,
    loader: Option<CorpusLoader>,
}

impl Context {
    /// Create a context from the global options.
    pub fn new(settings: Option<PathBuf>, wordlist: Option<PathBuf>) -> Self {
        Self {
            settings_override: settings,
            settings_file: OnceCell::new(),
            loader: wordlist.map(CorpusLoader::new),
        }
    }

    async fn settings_file(&self) -> Result<&SettingsFile> {
        self.settings_file
            .get_or_try_init(|| async {
                let path = match &self.settings_override {
                    Some(path) => path.clone(),
                    None => FileStorage::default_path()?,
                };
                let store =
                    SettingsStore::new(Box::new(FileStorage::new(&path)));
                Ok::<_, crate::Error>(SettingsFile { path, store })
            })
            .await
    }

    /// Settings store.
    pub async fn store(&self) -> Result<&SettingsStore> {
        Ok(&self.settings_file().await?.store)
    }

    /// Path to the settings file.
    pub async fn settings_path(&self) -> Result<&Path> {
        Ok(&self.settings_file().await?.path)
    }

    /// Saved settings or the defaults.
    ///
    /// When the settings file cannot be located the defaults
    /// are used.
    pub async fn settings(&self) -> Settings {
        match self.store().await {
            Ok(store) => store.load().await.unwrap_or_default(),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "settings unavailable, using defaults",
                );
                Settings::default()
            }
        }
    }

    /// Word corpus, replaced by the configured word list
    /// when it can be loaded.
    pub async fn corpus(&self) -> &'static WordCorpus {
        if let Some(loader) = &self.loader {
            loader.load(corpus()).await;
        }
        corpus()
    }
}

/// Resolve a pair of enable and disable flags.
pub(crate) fn flag(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
