// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

use crate::credentials::CredentialError;

/// Errors raised by the persistence layer.
///
/// Driver errors are flattened to strings so the type stays `Clone` and
/// comparable in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored JSON column or enum text could not be decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Initialization error: {0}")]
    InitializationError(String),
    #[error("Foreign key enforcement is not enabled")]
    ForeignKeyEnforcementNotEnabled,
    /// The year already holds [`ingenium_domain::MAX_TEAM_MEMBERS_PER_YEAR`] members.
    #[error("Maximum {max} team members are allowed per year.")]
    TeamCapacityExceeded { year: i32, max: i64 },
    /// Archival or promotion needed a current year and none is marked.
    #[error("No current year found")]
    NoCurrentYear,
    #[error("Credential failure: {0}")]
    CredentialFailure(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// A value does not fit the column it is stored in.
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            other => Self::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for PersistenceError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<CredentialError> for PersistenceError {
    fn from(err: CredentialError) -> Self {
        Self::CredentialFailure(err.to_string())
    }
}
