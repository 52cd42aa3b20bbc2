// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Article queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{Article, ArticleImage, ArticleSection, Author};
use tracing::debug;

use crate::diesel_schema::cms_articles;
use crate::error::PersistenceError;

/// Diesel Queryable struct for article rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_articles)]
struct ArticleRow {
    id: String,
    year: i32,
    section: String,
    title: String,
    excerpt: String,
    date: String,
    read_time: String,
    author_name: String,
    author_role: String,
    paragraphs: String,
    images: String,
}

impl ArticleRow {
    fn into_article(self) -> Result<Article, PersistenceError> {
        let section: ArticleSection = self
            .section
            .parse()
            .map_err(|e: ingenium_domain::DomainError| {
                PersistenceError::SerializationError(e.to_string())
            })?;
        let paragraphs: Vec<String> = serde_json::from_str(&self.paragraphs)?;
        let images: Vec<ArticleImage> = serde_json::from_str(&self.images)?;

        Ok(Article {
            id: self.id,
            year: self.year,
            section,
            title: self.title,
            excerpt: self.excerpt,
            date: self.date,
            read_time: self.read_time,
            author: Author {
                name: self.author_name,
                role: self.author_role,
            },
            paragraphs,
            images,
        })
    }
}

backend_fn! {
/// Lists the articles of one section of a year, most recently updated first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_section_articles(
    conn: &mut _,
    year: i32,
    section: ArticleSection,
) -> Result<Vec<Article>, PersistenceError> {
    let rows: Vec<ArticleRow> = cms_articles::table
        .filter(cms_articles::year.eq(year))
        .filter(cms_articles::section.eq(section.as_str()))
        .order((cms_articles::updated_at.desc(), cms_articles::id.asc()))
        .select(ArticleRow::as_select())
        .load(conn)?;

    debug!(year, section = section.as_str(), count = rows.len(), "Listed articles");
    rows.into_iter().map(ArticleRow::into_article).collect()
}
}

backend_fn! {
/// Lists every article of a year, newest created first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_year_articles(conn: &mut _, year: i32) -> Result<Vec<Article>, PersistenceError> {
    let rows: Vec<ArticleRow> = cms_articles::table
        .filter(cms_articles::year.eq(year))
        .order((cms_articles::created_at.desc(), cms_articles::id.asc()))
        .select(ArticleRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ArticleRow::into_article).collect()
}
}

backend_fn! {
/// Retrieves one article by `(year, section, id)`.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if no such article exists.
pub fn get_article(
    conn: &mut _,
    year: i32,
    section: ArticleSection,
    id: &str,
) -> Result<Option<Article>, PersistenceError> {
    debug!(year, section = section.as_str(), id, "Looking up article");

    let result: Result<ArticleRow, diesel::result::Error> = cms_articles::table
        .filter(cms_articles::year.eq(year))
        .filter(cms_articles::section.eq(section.as_str()))
        .filter(cms_articles::id.eq(id))
        .select(ArticleRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_article().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
