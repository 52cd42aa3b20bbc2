// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projects and their optional uploaded PDF.
//!
//! A project points readers at a PDF in one of two ways: an external link
//! supplied by the admin, or an uploaded blob served from
//! [`internal_pdf_path`]. An upload always wins on write.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Free-form JSON object stored without a schema.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// The only accepted upload MIME type.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// File name used when an upload does not carry one.
pub const DEFAULT_PDF_FILE_NAME: &str = "project.pdf";

const INVALID_FORMAT: &str = "Invalid PDF upload format.";
const NOT_A_PDF: &str = "Only PDF files are supported.";
const EMPTY_PDF: &str = "Uploaded PDF is empty.";

/// The path from which an uploaded project PDF is served.
#[must_use]
pub fn internal_pdf_path(year: i32, id: &str) -> String {
    format!("/api/projects/{year}/{id}/pdf")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectTeam {
    pub name: String,
}

/// A project as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub team: ProjectTeam,
    pub pdf_link: String,
    /// Absent when the stored object is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<JsonObject>,
    pub files: JsonObject,
    pub tech_stack: Vec<String>,
    /// Free-text creation date shown to readers.
    pub created_at: String,
    pub has_uploaded_pdf: bool,
}

/// A project write. `uploaded_pdf` replaces any stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub id: String,
    pub year: i32,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub team: ProjectTeam,
    pub pdf_link: String,
    pub problem_statement: JsonObject,
    pub files: JsonObject,
    pub tech_stack: Vec<String>,
    pub created_at: String,
    pub uploaded_pdf: Option<PdfUpload>,
}

impl ProjectInput {
    /// The link persisted for this write: the internal path when a PDF is
    /// uploaded, the caller's link otherwise.
    #[must_use]
    pub fn effective_pdf_link(&self) -> String {
        if self.uploaded_pdf.is_some() {
            internal_pdf_path(self.year, &self.id)
        } else {
            self.pdf_link.clone()
        }
    }
}

/// A decoded PDF upload ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    /// Decodes a `data:<mime>;base64,<payload>` upload.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPdfUpload` if the payload is not a
    /// base64 data URL, is not declared as `application/pdf`, or decodes
    /// to zero bytes.
    pub fn from_data_url(data_url: &str, file_name: &str) -> Result<Self, DomainError> {
        let (mime, payload) = data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .filter(|(mime, payload)| {
                !mime.is_empty() && !mime.contains(';') && !payload.is_empty()
            })
            .ok_or_else(|| DomainError::InvalidPdfUpload(INVALID_FORMAT.to_string()))?;

        if mime.trim().to_lowercase() != PDF_MIME_TYPE {
            return Err(DomainError::InvalidPdfUpload(NOT_A_PDF.to_string()));
        }

        let bytes: Vec<u8> = STANDARD
            .decode(payload.trim())
            .map_err(|_| DomainError::InvalidPdfUpload(INVALID_FORMAT.to_string()))?;
        if bytes.is_empty() {
            return Err(DomainError::InvalidPdfUpload(EMPTY_PDF.to_string()));
        }

        let file_name: &str = file_name.trim();
        Ok(Self {
            file_name: if file_name.is_empty() {
                DEFAULT_PDF_FILE_NAME.to_string()
            } else {
                file_name.to_string()
            },
            mime_type: PDF_MIME_TYPE.to_string(),
            bytes,
        })
    }
}

/// A stored project PDF served to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPdf {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
