use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Password(#[from] passgen_password::Error),

    #[error(transparent)]
    Preferences(#[from] passgen_preferences::Error),

    #[error(transparent)]
    Clipboard(#[from] arboard::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
