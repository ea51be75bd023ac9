use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VanMoofError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}: {body}")]
    HttpStatusError {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("{endpoint} returned a body that is not valid JSON: {source}")]
    InvalidResponseError {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Authentication error: {message}")]
    AuthenticationError { message: String },

    #[error("Data error: {message}")]
    DataError { message: String },

    #[error("Missing data in response: {}", .fields.join(", "))]
    MissingFieldsError { fields: Vec<&'static str> },

    #[error("IO error on {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidConfigValueError { field: String, reason: String },

    #[error("Prompt failed: {message}")]
    PromptError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Authentication,
    Data,
    Io,
    Parse,
    Config,
    Prompt,
}

impl VanMoofError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TransportError(_)
            | Self::HttpStatusError { .. }
            | Self::InvalidResponseError { .. } => ErrorCategory::Transport,
            Self::AuthenticationError { .. } => ErrorCategory::Authentication,
            Self::DataError { .. } | Self::MissingFieldsError { .. } => ErrorCategory::Data,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
            Self::PromptError { .. } => ErrorCategory::Prompt,
        }
    }

    /// Process exit status for the binary. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            ErrorCategory::Transport => 3,
            ErrorCategory::Authentication => 4,
            ErrorCategory::Data => 5,
            ErrorCategory::Io => 6,
            ErrorCategory::Parse => 7,
            ErrorCategory::Prompt => 8,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check your network connection and the API URL, then try again"
            }
            ErrorCategory::Authentication => "Check your username and password",
            ErrorCategory::Data => {
                "The account response has no usable bike details; inspect the logged payload"
            }
            ErrorCategory::Io => "Check that the file exists and is readable/writable",
            ErrorCategory::Parse => "Make sure the file contains the JSON saved by a previous run",
            ErrorCategory::Config => "Run with --help to see the accepted options",
            ErrorCategory::Prompt => "Pass --username and --password when no terminal is attached",
        }
    }

    pub(crate) fn data(message: impl Into<String>) -> Self {
        Self::DataError {
            message: message.into(),
        }
    }

    pub(crate) fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VanMoofError>;
