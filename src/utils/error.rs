use thiserror::Error;

#[derive(Error, Debug)]
pub enum TripleError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Search task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TripleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TripleError::ConfigError { .. }
            | TripleError::ConfigValidationError { .. }
            | TripleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TripleError::IoError(_) => ErrorCategory::Io,
            TripleError::CsvError(_)
            | TripleError::SerializationError(_)
            | TripleError::TaskError(_)
            | TripleError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TripleError::IoError(_) => ErrorSeverity::Medium,
            TripleError::TaskError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit code for the CLI binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TripleError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            TripleError::ConfigValidationError { field, .. } if field == "toml_parsing" => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            TripleError::ConfigValidationError { field, .. }
            | TripleError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            TripleError::ConfigError { .. } => {
                "Review the configuration and try again".to_string()
            }
            TripleError::TaskError(_) => {
                "The search was interrupted; rerun with a smaller --bound".to_string()
            }
            TripleError::CsvError(_)
            | TripleError::SerializationError(_)
            | TripleError::ProcessingError { .. } => {
                "Try a different --format or rerun with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("Could not write the results: {}", self),
            ErrorCategory::Processing => format!("Could not produce the results: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TripleError>;
