use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP request to {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Payload is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for `{field}` ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Decode,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::Network(_) | LookupError::HttpStatus { .. } => ErrorCategory::Network,
            LookupError::Decode(_) => ErrorCategory::Decode,
            LookupError::Io(_) => ErrorCategory::Io,
            LookupError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Decode => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failure that reaches `main`.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Decode => 3,
            ErrorCategory::Io => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Network(e) if e.is_connect() => {
                "Could not connect to the data source".to_string()
            }
            LookupError::Network(_) => "Downloading the data file failed".to_string(),
            LookupError::HttpStatus { status, .. } => {
                format!("The data source answered with HTTP status {}", status)
            }
            LookupError::Decode(_) => "The downloaded file is not readable text".to_string(),
            LookupError::Io(e) => format!("A local file or console operation failed: {}", e),
            LookupError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line arguments and try again",
            ErrorCategory::Network => "Check the URL and your network connection, then retry",
            ErrorCategory::Decode => "Make sure the URL points at a UTF-8 encoded CSV file",
            ErrorCategory::Io => "Check permissions on the working directory and the error log",
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
