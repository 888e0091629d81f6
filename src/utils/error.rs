use thiserror::Error;

use crate::domain::model::Year;

#[derive(Error, Debug)]
pub enum CensusError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Lifespan #{index} dies before it is born (born {born}, died {died})")]
    InvalidLifespanError { index: usize, born: Year, died: Year },

    #[error("Unsupported dataset format: '{extension}'")]
    UnsupportedFormatError { extension: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CensusError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CensusError::IoError(_) => ErrorSeverity::Critical,
            CensusError::CsvError(_)
            | CensusError::SerializationError(_)
            | CensusError::InvalidLifespanError { .. } => ErrorSeverity::High,
            CensusError::ConfigValidationError { .. }
            | CensusError::InvalidConfigValueError { .. }
            | CensusError::UnsupportedFormatError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CensusError::IoError(e) => format!("Could not read the dataset: {}", e),
            CensusError::CsvError(e) => format!("The CSV dataset is malformed: {}", e),
            CensusError::SerializationError(e) => {
                format!("The JSON dataset is malformed: {}", e)
            }
            CensusError::InvalidLifespanError { index, born, died } => format!(
                "Record {} says the individual died in {} before being born in {}",
                index, died, born
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CensusError::IoError(_) => "Check that the dataset path exists and is readable",
            CensusError::CsvError(_) => {
                "Use a 'born,died' header and leave 'died' empty for living individuals"
            }
            CensusError::SerializationError(_) => {
                "Provide a JSON array of objects like {\"born\": 1900, \"died\": 1950}"
            }
            CensusError::ConfigValidationError { .. } => {
                "Check the TOML syntax: each [[lifespans]] entry needs a 'born' year"
            }
            CensusError::InvalidConfigValueError { .. } => "Fix the highlighted value and retry",
            CensusError::InvalidLifespanError { .. } => {
                "Correct the record or run without --strict to keep it"
            }
            CensusError::UnsupportedFormatError { .. } => {
                "Use a dataset file ending in .csv, .toml or .json"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CensusError>;
