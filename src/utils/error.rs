use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid plot input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LayoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LayoutError::IoError(_) => ErrorCategory::Io,
            LayoutError::SerializationError(_)
            | LayoutError::CsvError(_)
            | LayoutError::InvalidInput { .. } => ErrorCategory::Data,
            LayoutError::ConfigError { .. }
            | LayoutError::ConfigValidationError { .. }
            | LayoutError::InvalidConfigValueError { .. }
            | LayoutError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LayoutError::IoError(_) => ErrorSeverity::Critical,
            LayoutError::CsvError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input file exists and the output directory is writable",
            ErrorCategory::Data => {
                "Check that the input is a JSON object with 'data', 'summaries' and 'comparisons' arrays"
            }
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LayoutError::IoError(e) => format!("Could not access a file: {}", e),
            LayoutError::SerializationError(e) => format!("Could not read plot data: {}", e),
            LayoutError::CsvError(e) => format!("Could not write CSV output: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
