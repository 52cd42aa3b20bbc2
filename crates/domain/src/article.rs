// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::section::ArticleSection;

/// Byline of an article or of the editorial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,
    pub role: String,
}

/// An image placed between article paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleImage {
    /// Opaque image reference or embedded image data.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// 1-based index of the paragraph this image follows.
    pub position: u32,
}

/// An article in one of the four editorial sections of a year.
///
/// `id` is globally unique. Upserting an existing id may move the
/// article to another year or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub year: i32,
    pub section: ArticleSection,
    pub title: String,
    pub excerpt: String,
    /// Free-text publication date.
    pub date: String,
    /// Free-text reading time, e.g. "5 min read".
    pub read_time: String,
    pub author: Author,
    pub paragraphs: Vec<String>,
    pub images: Vec<ArticleImage>,
}
