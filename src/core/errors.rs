use thiserror::Error;

#[derive(Error, Debug)]
pub enum YomitomoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Backend is not configured (missing endpoint URL)")]
    BackendNotConfigured,

    #[error("Backend returned status {0}")]
    BackendStatus(u16),

    #[error("Failed to load book: {0}")]
    FailedToLoadBook(String),

    #[error("YomitomoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for YomitomoError {
    fn from(error: std::io::Error) -> Self {
        YomitomoError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for YomitomoError {
    fn from(error: reqwest::Error) -> Self {
        YomitomoError::Reqwest(Box::new(error))
    }
}
