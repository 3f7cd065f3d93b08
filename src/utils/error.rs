use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot {action} while session is {from}")]
    InvalidTransition { from: String, action: String },

    #[error("{message}")]
    Verification { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Session,
}

impl ClientError {
    pub fn verification(message: impl Into<String>) -> Self {
        Self::Verification {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(_) | Self::Status { .. } => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Data,
            Self::Io(_)
            | Self::Toml(_)
            | Self::Url(_)
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::InvalidTransition { .. } | Self::Verification { .. } => ErrorCategory::Session,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the marketplace backend: {}", self),
            ErrorCategory::Data => format!("The backend returned data that could not be read: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Session => format!("Session problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
