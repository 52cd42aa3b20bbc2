// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the Ingenium magazine CMS.
//!
//! Content is scoped by an integer publication year. This crate defines the
//! six content kinds, the fixed section keys and their visibility overlay,
//! year lifecycle types, and the validation applied at the API boundary.
//! It performs no I/O.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod article;
mod editorial;
mod error;
mod gallery;
mod home;
mod project;
mod section;
mod team;
mod validation;
mod year;

#[cfg(test)]
mod tests;

pub use article::{Article, ArticleImage, Author};
pub use editorial::{DEFAULT_EDITORIAL_TITLE, EditorialContent, Quote};
pub use error::DomainError;
pub use gallery::{GalleryItem, GalleryKind, Photographer};
pub use home::{CurrentYearData, HomeData};
pub use project::{
    DEFAULT_PDF_FILE_NAME, JsonObject, PDF_MIME_TYPE, PdfUpload, Project, ProjectInput,
    ProjectPdf, ProjectTeam, internal_pdf_path,
};
pub use section::{
    ArticleSection, SectionKey, SectionSetting, is_section_hidden, visible_sections,
};
pub use team::{MAX_TEAM_MEMBERS_PER_YEAR, TeamMember};
pub use validation::{
    MAX_ID_LENGTH, MAX_SHORT_TEXT_LENGTH, parse_year, require_non_empty, resolve_display_name,
    validate_length, validate_lengths, validate_year,
};
pub use year::{ArchiveOutcome, YEAR_MAX, YEAR_MIN, YearRecord, YearStatus, calendar_year};
