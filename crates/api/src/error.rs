// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use ingenium_domain::DomainError;
use ingenium_persistence::PersistenceError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login failed. The reason is for logs only and never names which
    /// credential was wrong.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// No valid session accompanies a request that needs one.
    Unauthorized,
    /// Storage failed while authenticating.
    Storage(PersistenceError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Storage(err) => write!(f, "Authentication storage error: {err}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The presented credentials are wrong.
    AuthenticationFailed,
    /// The request needs a valid session and has none.
    Unauthorized,
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A write would exceed a per-year capacity.
    CapacityExceeded {
        /// A human-readable description of the limit.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A stored-state precondition does not hold.
    InvariantViolation {
        /// A description of the violated invariant.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Builds an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(field: &str, message: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// Builds a `ResourceNotFound` error.
    #[must_use]
    pub fn not_found(resource_type: &str, message: String) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed => write!(f, "Invalid credentials."),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::InvalidInput { message, .. } | Self::CapacityExceeded { message } => {
                write!(f, "{message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvariantViolation { message } => {
                write!(f, "Invariant violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { .. } => Self::AuthenticationFailed,
            AuthError::Unauthorized => Self::Unauthorized,
            AuthError::Storage(err) => translate_persistence_error(err),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidYear(_) => ApiError::invalid_input("year", "Invalid year"),
        DomainError::UnknownSection(_) => ApiError::invalid_input("section", "Invalid section"),
        DomainError::UnknownGalleryKind(_) => ApiError::invalid_input("kind", "Invalid kind"),
        DomainError::MissingField { field } | DomainError::FieldTooLong { field, .. } => {
            ApiError::InvalidInput {
                field: field.to_string(),
                message: err.to_string(),
            }
        }
        DomainError::InvalidPdfUpload(message) => ApiError::InvalidInput {
            field: String::from("uploadedPdf"),
            message,
        },
        DomainError::UnknownYearStatus(value) => ApiError::Internal {
            message: format!("Stored year status is unreadable: {value}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures storage details are not leaked
/// to callers; the HTTP layer logs `Internal` details and answers generically.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::TeamCapacityExceeded { .. } => ApiError::CapacityExceeded {
            message: err.to_string(),
        },
        PersistenceError::NoCurrentYear => ApiError::InvariantViolation {
            message: err.to_string(),
        },
        PersistenceError::NotFound(message) => ApiError::not_found("Record", message),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
