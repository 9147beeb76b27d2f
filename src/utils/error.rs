use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostReportError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Input file unreadable: {path}: {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cost data: {message}")]
    DataError { message: String },

    #[error("Unexpected cost data layout at {path}: {message}")]
    SchemaError { path: String, message: String },

    #[error("Cannot write output file {path}: {source}")]
    OutputWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

impl CostReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } | Self::InputUnreadable { .. } => ErrorCategory::Input,
            Self::DataError { .. } | Self::SchemaError { .. } => ErrorCategory::Data,
            Self::OutputWriteError { .. } | Self::CsvError(_) => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => format!("Cost export '{}' does not exist", path),
            Self::InputUnreadable { path, source } => {
                format!("Cost export '{}' could not be read ({})", path, source)
            }
            Self::DataError { message } => format!("Cost export is not valid JSON: {}", message),
            Self::SchemaError { path, message } => {
                format!("Cost export has an unexpected layout at {}: {}", path, message)
            }
            Self::OutputWriteError { path, source } => {
                format!("Report could not be written to '{}' ({})", path, source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check the input path and its file permissions",
            ErrorCategory::Data => {
                "Export the cost breakdown grouped by SERVICE as JSON (ResultsByTime/Groups/Metrics)"
            }
            ErrorCategory::Output => {
                "Make sure the destination directory exists and is writable"
            }
            ErrorCategory::Configuration => "Review the command-line options and settings file",
        }
    }
}

pub type Result<T> = std::result::Result<T, CostReportError>;
