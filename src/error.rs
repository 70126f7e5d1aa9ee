use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("An API key is required to use the chat feature")]
    MissingCredential,

    #[error("Completion request failed: {0}")]
    CompletionFailed(String),

    #[error("Completion response has no generated text")]
    MalformedResponse,

    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },

    #[error("Application state lock poisoned: {0}")]
    StatePoisoned(String),

    #[error("{0}")]
    Custom(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for AppError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        AppError::StatePoisoned(e.to_string())
    }
}

// ─── User-visible notifications ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast-style message shown to the user. Every failure surfaces as one of
/// these; error details stay in the logs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl From<&AppError> for Notification {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::MissingCredential => Notification {
                title: "API Key Required".to_string(),
                description: "Please enter your API key to use the chat feature.".to_string(),
                variant: NotificationVariant::Destructive,
            },
            _ => Notification {
                title: "Error".to_string(),
                description: "Failed to get a response. Please check your API key and try again."
                    .to_string(),
                variant: NotificationVariant::Destructive,
            },
        }
    }
}
