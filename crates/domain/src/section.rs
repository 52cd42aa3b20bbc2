// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Section keys and the per-year visibility overlay.
//!
//! Six section keys exist: the four editorial article sections plus the
//! gallery and projects kinds. Each `(year, section)` pair carries a
//! display name and a hidden flag. Hiding a section removes it from
//! navigation and from the year's aggregated content without deleting
//! any content.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;

/// Every section that carries a visibility setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Utkarshi,
    Abohoman,
    Prayukti,
    Sarvagya,
    Gallery,
    Projects,
}

impl SectionKey {
    /// All section keys in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Utkarshi,
        Self::Abohoman,
        Self::Prayukti,
        Self::Sarvagya,
        Self::Gallery,
        Self::Projects,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utkarshi => "utkarshi",
            Self::Abohoman => "abohoman",
            Self::Prayukti => "prayukti",
            Self::Sarvagya => "sarvagya",
            Self::Gallery => "gallery",
            Self::Projects => "projects",
        }
    }

    /// The display name used until an admin overrides it: the key with
    /// its first letter capitalized.
    #[must_use]
    pub fn default_display_name(self) -> String {
        let key: &str = self.as_str();
        let mut chars = key.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Returns the article section for the four editorial keys.
    #[must_use]
    pub const fn article_section(self) -> Option<ArticleSection> {
        match self {
            Self::Utkarshi => Some(ArticleSection::Utkarshi),
            Self::Abohoman => Some(ArticleSection::Abohoman),
            Self::Prayukti => Some(ArticleSection::Prayukti),
            Self::Sarvagya => Some(ArticleSection::Sarvagya),
            Self::Gallery | Self::Projects => None,
        }
    }
}

impl FromStr for SectionKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four editorial sections an article can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleSection {
    Utkarshi,
    Abohoman,
    Prayukti,
    Sarvagya,
}

impl ArticleSection {
    pub const ALL: [Self; 4] = [
        Self::Utkarshi,
        Self::Abohoman,
        Self::Prayukti,
        Self::Sarvagya,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.section_key().as_str()
    }

    /// The visibility key governing this section.
    #[must_use]
    pub const fn section_key(self) -> SectionKey {
        match self {
            Self::Utkarshi => SectionKey::Utkarshi,
            Self::Abohoman => SectionKey::Abohoman,
            Self::Prayukti => SectionKey::Prayukti,
            Self::Sarvagya => SectionKey::Sarvagya,
        }
    }
}

impl FromStr for ArticleSection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKey::from_str(s)?
            .article_section()
            .ok_or_else(|| DomainError::UnknownSection(s.to_string()))
    }
}

impl std::fmt::Display for ArticleSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name and visibility of one section within one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSetting {
    pub year: i32,
    pub section_key: SectionKey,
    pub display_name: String,
    pub is_hidden: bool,
}

impl SectionSetting {
    /// The setting a section has before any admin changes it.
    #[must_use]
    pub fn default_for(year: i32, section_key: SectionKey) -> Self {
        Self {
            year,
            section_key,
            display_name: section_key.default_display_name(),
            is_hidden: false,
        }
    }

    /// Default settings for all six sections of `year`.
    #[must_use]
    pub fn defaults_for_year(year: i32) -> Vec<Self> {
        SectionKey::ALL
            .into_iter()
            .map(|key| Self::default_for(year, key))
            .collect()
    }
}

/// Returns true when `settings` marks `section_key` hidden.
///
/// A section without a setting row is visible.
#[must_use]
pub fn is_section_hidden(settings: &[SectionSetting], section_key: SectionKey) -> bool {
    settings
        .iter()
        .any(|setting| setting.section_key == section_key && setting.is_hidden)
}

/// Returns the visible sections in navigation order.
#[must_use]
pub fn visible_sections(settings: &[SectionSetting]) -> Vec<SectionSetting> {
    SectionKey::ALL
        .into_iter()
        .filter_map(|key| settings.iter().find(|setting| setting.section_key == key))
        .filter(|setting| !setting.is_hidden)
        .cloned()
        .collect()
}
