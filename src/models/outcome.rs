use axum::http::StatusCode;

use crate::models::validation::ValidationError;

/// Terminal classification of one forwarding attempt. Every invocation
/// resolves to exactly one of these; nothing propagates as a fault.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event never reached the provider.
    ValidationError { message: String, status: StatusCode },

    /// The provider call failed, either in transit or by its answer.
    ProviderError {
        message: String,
        status: StatusCode,
        detail: Option<String>,
    },

    /// The provider accepted the send.
    Success { message: String, status: StatusCode },
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::ValidationError { message, .. }
            | Outcome::ProviderError { message, .. }
            | Outcome::Success { message, .. } => message,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Outcome::ValidationError { status, .. }
            | Outcome::ProviderError { status, .. }
            | Outcome::Success { status, .. } => *status,
        }
    }
}

impl From<ValidationError> for Outcome {
    fn from(error: ValidationError) -> Self {
        Outcome::ValidationError {
            message: error.message,
            status: error.status,
        }
    }
}
