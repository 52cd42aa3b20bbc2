// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Photograph,
    Drawing,
}

impl GalleryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photograph => "photograph",
            Self::Drawing => "drawing",
        }
    }
}

impl FromStr for GalleryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photograph" => Ok(Self::Photograph),
            "drawing" => Ok(Self::Drawing),
            other => Err(DomainError::UnknownGalleryKind(other.to_string())),
        }
    }
}

/// Credit line for a gallery item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photographer {
    pub name: String,
    pub dept: String,
    pub year: String,
}

/// A photograph or drawing shown in a year's gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub year: i32,
    pub kind: GalleryKind,
    pub title: String,
    pub description: String,
    pub image_id: String,
    pub photographer: Photographer,
    /// Ranking label, only meaningful for drawings.
    pub rank: String,
    /// Grouping label, only meaningful for drawings.
    pub folder_context: String,
}
