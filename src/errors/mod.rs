use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MigrateError {
    // Configuration errors
    ConfigurationError {
        message: String,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Rule errors
    RuleCompilationError {
        rule: String,
        reason: String,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
    MarkerMissingError {
        file_path: String,
        marker: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl MigrateError {
    pub fn config_error(message: &str, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            suggestion: suggestion.map(std::string::ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn rule_error(rule: &str, reason: &str) -> Self {
        Self::RuleCompilationError {
            rule: rule.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn marker_error(file_path: &str, marker: &str) -> Self {
        Self::MarkerMissingError {
            file_path: file_path.to_string(),
            marker: marker.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, suggestion } => {
                let mut msg = format!("Configuration error: {message}");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Run 'logmigrate init' to create a configuration file")
            }
            Self::RuleCompilationError { rule, reason } => {
                format!("Rule '{rule}' has an invalid pattern: {reason}\n💡 Patterns use regex syntax; escape literal metacharacters with a backslash")
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::MarkerMissingError { file_path, marker } => {
                format!("File '{file_path}' does not contain the required marker '{marker}'\n💡 Add the logger import to the file before migrating it")
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {content_type}: {reason}\n💡 Check the format and syntax of the input")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for MigrateError {}

/// Result type alias for logmigrate operations
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &MigrateError) {
        log::error!("{}", error.technical_details());
        eprintln!("❌ {}", error.user_message());
    }
}

impl From<std::io::Error> for MigrateError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for MigrateError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<serde_json::Error> for MigrateError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}
