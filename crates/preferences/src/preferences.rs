//! Key/value storage providers for persisted settings.
//!
//! Providers behave like browser local storage: string values
//! addressed by string keys. A JSON document on disc and an
//! in-memory map are provided.
use crate::{Error, Result};
use async_trait::async_trait;
use etcetera::{
    app_strategy::choose_native_strategy, AppStrategy, AppStrategyArgs,
};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use tokio::sync::Mutex;

const APP_NAME: &str = "passgen";
const SETTINGS_FILE: &str = "settings.json";

/// Boxed storage provider.
pub type SettingsStorageProvider =
    Box<dyn SettingsStorage + Send + Sync + 'static>;

/// Storage provider for string values addressed by key.
#[async_trait]
pub trait SettingsStorage {
    /// Get the value for a key.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Set the value for a key.
    ///
    /// If the key already exists it is overwritten.
    async fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Remove a key.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// Map of stored values.
type ItemMap = BTreeMap<String, String>;

/// Store values in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<ItemMap>,
}

impl MemoryStorage {
    /// Create empty memory storage.
    pub fn new() -> Self {
        Default::default()
    }
}

#[async_trait]
impl SettingsStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.lock().await;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut items = self.items.lock().await;
        items.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items.lock().await;
        items.remove(key);
        Ok(())
    }
}

/// Store values in a file as JSON.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    /// Create a file provider for a path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Create a file provider in the platform configuration directory.
    pub fn new_default() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Default settings file in the platform configuration directory.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = choose_native_strategy(AppStrategyArgs {
            top_level_domain: "com".to_string(),
            author: APP_NAME.to_string(),
            app_name: APP_NAME.to_string(),
        })
        .map_err(|e| Error::ConfigDir(e.to_string()))?;
        Ok(strategy.config_dir().join(SETTINGS_FILE))
    }

    /// Path to the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<ItemMap> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Default::default());
        }
        let content = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice::<ItemMap>(&content)?)
    }

    async fn save(&self, items: &ItemMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let buf = serde_json::to_vec_pretty(items)?;
        tokio::fs::write(&self.path, buf).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await?;
        Ok(items.remove(key))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.lock.lock().await;
        // Unreadable files are replaced rather than blocking saves.
        let mut items = self.load().await.unwrap_or_default();
        items.insert(key.to_owned(), value);
        self.save(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await.unwrap_or_default();
        if items.remove(key).is_some() {
            self.save(&items).await?;
        }
        Ok(())
    }
}
