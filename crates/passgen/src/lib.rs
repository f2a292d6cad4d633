//! Command line interface for generating passphrases
//! and passwords.
pub mod cli;
pub mod commands;
mod error;
pub(crate) mod helpers;

pub use error::Error;
pub use passgen_cli_helpers::CommandTree;

/// Result type for the executable library.
pub type Result<T> = std::result::Result<T, error::Error>;
