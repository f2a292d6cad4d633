//! The persisted settings record.
use crate::{Result, SettingsStorageProvider};
use passgen_password::{
    generator::{normalize_word_count, parse_leading_int},
    GenerationRequest,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Key the settings record is stored under.
pub const SETTINGS_KEY: &str = "passgen_options_v1";

/// Numbers may have been stored as form input strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Lenient {
    fn into_integer(self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(value),
            Self::Float(value) => Some(value.trunc() as i64),
            Self::Text(value) => parse_leading_int(&value),
        }
    }
}

fn lenient_integer<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Lenient>::deserialize(deserializer)?
        .and_then(Lenient::into_integer))
}

/// Zero and negative lengths mean no limit.
fn lenient_length<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_integer(deserializer)?
        .filter(|value| *value > 0)
        .and_then(|value| usize::try_from(value).ok()))
}

/// Generator options remembered between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Number of words as entered, corrected when building
    /// a request.
    #[serde(default, deserialize_with = "lenient_integer")]
    pub word_count: Option<i64>,
    /// Separator between words.
    #[serde(default)]
    pub separator: Option<String>,
    /// Whether symbols are affixed to words.
    #[serde(default)]
    pub add_symbol: Option<bool>,
    /// Maximum passphrase length.
    #[serde(default, deserialize_with = "lenient_length")]
    pub max_length: Option<usize>,
}

impl Settings {
    /// Build a generation request from these settings.
    ///
    /// Missing values use the request defaults and out of range
    /// values are corrected the same way as command line input.
    pub fn to_request(&self) -> GenerationRequest {
        let mut request = GenerationRequest::default();
        if let Some(word_count) = self.word_count {
            request.word_count = normalize_word_count(word_count);
        }
        if let Some(separator) = &self.separator {
            request = request.separator(separator.clone());
        }
        request
            .max_length(self.max_length)
            .symbols(self.add_symbol.unwrap_or(false))
    }
}

impl From<&GenerationRequest> for Settings {
    fn from(value: &GenerationRequest) -> Self {
        Self {
            word_count: Some(
                i64::try_from(value.word_count).unwrap_or(i64::MAX),
            ),
            separator: Some(value.separator.clone()),
            add_symbol: Some(value.symbols),
            max_length: value.max_length,
        }
    }
}

/// Loads and saves the settings record through a storage provider.
pub struct SettingsStore {
    provider: SettingsStorageProvider,
    key: String,
}

impl SettingsStore {
    /// Create a settings store using the default key.
    pub fn new(provider: SettingsStorageProvider) -> Self {
        Self {
            provider,
            key: SETTINGS_KEY.to_owned(),
        }
    }

    /// Use a different storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Storage key for the settings record.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the settings record.
    ///
    /// Missing, unreadable and corrupt records yield `None`.
    pub async fn load(&self) -> Option<Settings> {
        let raw = match self.provider.get_item(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "could not read settings",
                );
                return None;
            }
        };
        match serde_json::from_str::<Settings>(&raw) {
            Ok(settings) => Some(settings),
            Err(error) => {
                tracing::warn!(
                    error = %error,
                    "ignoring corrupt settings",
                );
                None
            }
        }
    }

    /// Save the settings record.
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        let value = serde_json::to_string(settings)?;
        self.provider.set_item(&self.key, value).await
    }

    /// Remove the settings record.
    pub async fn clear(&self) -> Result<()> {
        self.provider.remove_item(&self.key).await
    }
}
