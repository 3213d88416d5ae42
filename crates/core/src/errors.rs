use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("malformed order history: {0}")]
    MalformedOrderHistory(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("history unreadable: {0}")]
    HistoryUnreadable(String),
    #[error("store failure: {0}")]
    Store(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) | Self::HistoryUnreadable(_) => "history",
            Self::Store(_) => "store",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => {
                "The order history could not be processed. Check its contents and try again."
            }
            Self::HistoryUnreadable(_) => {
                "The order history file could not be read. Check that the path exists and is \
                 readable."
            }
            Self::Store(_) => "The order store rejected the request.",
            Self::Configuration(_) => "The application is misconfigured.",
        }
    }
}
