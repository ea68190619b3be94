//! Contract error types for the tales service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Tales service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalesError {
    /// Tale or reader position not found
    NotFound {
        /// Resource type (tale, position)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Validation error
    Validation {
        /// Validation error message
        message: String,
    },
    /// Hosted database or relay failed
    Upstream {
        /// Failure summary
        message: String,
    },
}

impl TalesError {
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TalesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Upstream { message } => {
                write!(f, "Upstream error: {}", message)
            }
        }
    }
}

impl std::error::Error for TalesError {}
