// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cache invalidation for rendered public pages.
//!
//! Every successful write describes what changed as a [`ContentChange`].
//! The change maps to the public page paths that could display it, and each
//! path is handed to a [`PageInvalidator`]. Invalidation is informational:
//! it runs after the write has committed and cannot fail the request.

use ingenium_domain::ArticleSection;
use serde::{Deserialize, Serialize};
#[cfg(any(test, feature = "test-support"))]
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// A committed change to public content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentChange {
    /// An article was created or updated.
    ArticleSaved {
        /// The article's year.
        year: i32,
        /// The article's section.
        section: ArticleSection,
    },
    /// An article was deleted.
    ArticleDeleted {
        /// The year the article was filed under.
        year: i32,
        /// The section the article was filed under.
        section: ArticleSection,
    },
    /// A project was created or updated.
    ProjectSaved {
        /// The project's year.
        year: i32,
        /// The project id.
        id: String,
    },
    /// A project was deleted.
    ProjectDeleted,
    /// A gallery item was created or updated.
    GalleryItemSaved {
        /// The item's year.
        year: i32,
    },
    /// A gallery item was deleted.
    GalleryItemDeleted,
    /// A team member was created, updated, or deleted.
    TeamChanged {
        /// The member's year.
        year: i32,
    },
    /// A section setting changed.
    SectionSettingSaved {
        /// The setting's year.
        year: i32,
    },
    /// The editorial was overwritten.
    EditorialSaved,
    /// The current year was archived.
    YearArchived {
        /// The year that was archived.
        archived_year: i32,
    },
    /// A year was made current.
    CurrentYearSet {
        /// The new current year.
        year: i32,
    },
}

impl ContentChange {
    /// The public page paths that may display this change.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        match self {
            Self::ArticleSaved { year, section } | Self::ArticleDeleted { year, section } => vec![
                String::from("/"),
                format!("/year/{year}"),
                format!("/year/{year}/{}", section.as_str()),
                String::from("/archive"),
            ],
            Self::SectionSettingSaved { year }
            | Self::CurrentYearSet { year }
            | Self::YearArchived {
                archived_year: year,
            } => vec![
                String::from("/"),
                format!("/year/{year}"),
                String::from("/archive"),
            ],
            Self::ProjectSaved { year, id } => vec![
                String::from("/projects"),
                format!("/year/{year}/projects"),
                format!("/year/{year}/projects/{id}"),
            ],
            Self::ProjectDeleted => vec![String::from("/projects")],
            Self::GalleryItemSaved { year } => {
                vec![String::from("/gallery"), format!("/year/{year}/gallery")]
            }
            Self::GalleryItemDeleted => vec![String::from("/gallery")],
            Self::TeamChanged { year } => vec![
                String::from("/team"),
                String::from("/"),
                format!("/year/{year}"),
                String::from("/archive"),
            ],
            Self::EditorialSaved => vec![
                String::from("/"),
                String::from("/editorial"),
                String::from("/archive"),
            ],
        }
    }
}

/// Receives public paths whose cached rendering is stale.
pub trait PageInvalidator: Send + Sync {
    /// Marks one public path as stale.
    fn invalidate_path(&self, path: &str);
}

/// Hands every path of `change` to `invalidator`.
pub fn invalidate(invalidator: &dyn PageInvalidator, change: &ContentChange) {
    for path in change.paths() {
        invalidator.invalidate_path(&path);
    }
}

/// Emits one structured `tracing` event per stale path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInvalidator;

impl PageInvalidator for TracingInvalidator {
    fn invalidate_path(&self, path: &str) {
        info!(path, "Invalidated page");
    }
}

/// Records stale paths in memory.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingInvalidator {
    paths: Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingInvalidator {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded paths in call order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns and clears the recorded paths.
    #[must_use]
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.paths.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

#[cfg(any(test, feature = "test-support"))]
impl PageInvalidator for RecordingInvalidator {
    fn invalidate_path(&self, path: &str) {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
