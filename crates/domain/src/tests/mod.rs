// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod home;
mod project;
mod section;
mod validation;

use crate::{Article, ArticleSection, Author};

pub fn create_test_article(id: &str, year: i32, section: ArticleSection) -> Article {
    Article {
        id: id.to_string(),
        year,
        section,
        title: format!("Title {id}"),
        excerpt: String::from("An excerpt"),
        date: String::from("March 2025"),
        read_time: String::from("4 min read"),
        author: Author {
            name: String::from("Test Author"),
            role: String::from("Writer"),
        },
        paragraphs: vec![String::from("First paragraph")],
        images: Vec::new(),
    }
}
