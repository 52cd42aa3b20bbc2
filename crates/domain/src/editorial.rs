// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::article::Author;

/// Title used for the editorial before an admin writes one.
pub const DEFAULT_EDITORIAL_TITLE: &str = "From the Editor's Desk";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// The single editorial shown across all years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorialContent {
    pub title: String,
    pub author: Author,
    pub date: String,
    pub content: Vec<String>,
    pub quote: Quote,
}

impl Default for EditorialContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_EDITORIAL_TITLE.to_string(),
            author: Author::default(),
            date: String::new(),
            content: Vec::new(),
            quote: Quote::default(),
        }
    }
}
