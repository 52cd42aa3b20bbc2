// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while validating content at the domain boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The year is not an integer in the supported range.
    InvalidYear(String),
    /// The section key is not one of the fixed section keys.
    UnknownSection(String),
    /// The gallery kind is not `photograph` or `drawing`.
    UnknownGalleryKind(String),
    /// A stored year status is neither `current` nor `archived`.
    UnknownYearStatus(String),
    /// A required field was missing or blank.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A field is longer than its stored column allows.
    FieldTooLong {
        /// The name of the oversized field.
        field: &'static str,
        /// The maximum length in characters.
        max: usize,
    },
    /// An uploaded PDF payload was rejected.
    InvalidPdfUpload(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(value) => {
                write!(f, "Invalid year '{value}': expected an integer from 1900 to 3000")
            }
            Self::UnknownSection(value) => write!(f, "Unknown section: {value}"),
            Self::UnknownGalleryKind(value) => write!(f, "Unknown gallery kind: {value}"),
            Self::UnknownYearStatus(value) => write!(f, "Unknown year status: {value}"),
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::FieldTooLong { field, max } => {
                write!(f, "Field '{field}' must be at most {max} characters")
            }
            Self::InvalidPdfUpload(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
