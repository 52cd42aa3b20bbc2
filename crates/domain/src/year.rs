// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Lowest year accepted at the API boundary.
pub const YEAR_MIN: i32 = 1900;

/// Highest year accepted at the API boundary.
pub const YEAR_MAX: i32 = 3000;

/// Lifecycle status of a publication year.
///
/// Exactly one year is `Current` at any time. Every other year is
/// `Archived`. Years are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearStatus {
    Current,
    Archived,
}

impl YearStatus {
    /// Returns the stored representation of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for YearStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "current" => Ok(Self::Current),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::UnknownYearStatus(other.to_string())),
        }
    }
}

/// A year row as seen by the admin year list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    pub year: i32,
    pub status: YearStatus,
    /// When the year was archived by an archive transition, if ever.
    pub archived_at: Option<String>,
}

/// Result of archiving the current year and promoting the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOutcome {
    pub archived_year: i32,
    pub new_current_year: i32,
}

/// Returns the present calendar year in UTC.
///
/// Used as the seed year for an empty database and as the fallback
/// current year when no year row is marked current.
#[must_use]
pub fn calendar_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
