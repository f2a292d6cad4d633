//! Generator settings persisted as a single record.
//!
//! The record is stored as JSON under one key of a pluggable
//! key/value [SettingsStorage]; missing or corrupt records are
//! ignored rather than treated as errors.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

mod error;
mod preferences;
mod settings;

pub use error::Error;
pub use preferences::*;
pub use settings::{Settings, SettingsStore, SETTINGS_KEY};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
