use thiserror::Error;

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a word list has no usable words.
    #[error("word list does not contain any words")]
    EmptyCorpus,

    /// Error generated when a password length of zero is requested.
    #[error("password length must be greater than zero")]
    ZeroLength,

    /// Error generated when no character classes were selected
    /// for a password.
    #[error("no character classes selected for password generation")]
    NoCharacters,

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
