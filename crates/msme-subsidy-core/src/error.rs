use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubsidyError {
    #[error("Invalid loan terms: {field} — {reason}")]
    InvalidTerms { field: String, reason: String },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Policy table error: {0}")]
    PolicyError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SubsidyError {
    /// Prefix the offending field with the scheme it belongs to.
    pub fn in_scheme(self, scheme: &str) -> Self {
        match self {
            SubsidyError::InvalidTerms { field, reason } => SubsidyError::InvalidTerms {
                field: format!("{scheme}.{field}"),
                reason,
            },
            SubsidyError::InvalidInput { field, reason } => SubsidyError::InvalidInput {
                field: format!("{scheme}.{field}"),
                reason,
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for SubsidyError {
    fn from(e: serde_json::Error) -> Self {
        SubsidyError::SerializationError(e.to_string())
    }
}

impl From<serde_yaml::Error> for SubsidyError {
    fn from(e: serde_yaml::Error) -> Self {
        SubsidyError::SerializationError(e.to_string())
    }
}
