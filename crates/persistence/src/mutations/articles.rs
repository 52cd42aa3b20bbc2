// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Article mutations.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{Article, ArticleSection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_articles;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or fully overwrites an article keyed by its id.
///
/// An existing article may move to another year or section. The target
/// year must already exist.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn upsert_article(conn: &mut _, article: &Article) -> Result<(), PersistenceError> {
    let paragraphs_json: String = serde_json::to_string(&article.paragraphs)?;
    let images_json: String = serde_json::to_string(&article.images)?;
    let now: String = timestamp_now();

    let created: bool = conn.write_transaction(|conn| {
        let existing: bool = diesel::select(exists(
            cms_articles::table.filter(cms_articles::id.eq(&article.id)),
        ))
        .get_result(conn)?;

        if existing {
            diesel::update(cms_articles::table.filter(cms_articles::id.eq(&article.id)))
                .set((
                    cms_articles::year.eq(article.year),
                    cms_articles::section.eq(article.section.as_str()),
                    cms_articles::title.eq(&article.title),
                    cms_articles::excerpt.eq(&article.excerpt),
                    cms_articles::date.eq(&article.date),
                    cms_articles::read_time.eq(&article.read_time),
                    cms_articles::author_name.eq(&article.author.name),
                    cms_articles::author_role.eq(&article.author.role),
                    cms_articles::paragraphs.eq(&paragraphs_json),
                    cms_articles::images.eq(&images_json),
                    cms_articles::updated_at.eq(&now),
                ))
                .execute(conn)?;
        } else {
            diesel::insert_into(cms_articles::table)
                .values((
                    cms_articles::id.eq(&article.id),
                    cms_articles::year.eq(article.year),
                    cms_articles::section.eq(article.section.as_str()),
                    cms_articles::title.eq(&article.title),
                    cms_articles::excerpt.eq(&article.excerpt),
                    cms_articles::date.eq(&article.date),
                    cms_articles::read_time.eq(&article.read_time),
                    cms_articles::author_name.eq(&article.author.name),
                    cms_articles::author_role.eq(&article.author.role),
                    cms_articles::paragraphs.eq(&paragraphs_json),
                    cms_articles::images.eq(&images_json),
                    cms_articles::created_at.eq(&now),
                    cms_articles::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        Ok(!existing)
    })?;

    info!(
        id = %article.id,
        year = article.year,
        section = article.section.as_str(),
        created,
        "Saved article"
    );
    Ok(())
}
}

backend_fn! {
/// Deletes an article by id, returning the year and section it lived in.
///
/// Deleting a missing id is not an error and returns `None`.
///
/// # Errors
///
/// Returns an error if the stored section is unknown or the delete fails.
pub fn delete_article(
    conn: &mut _,
    id: &str,
) -> Result<Option<(i32, ArticleSection)>, PersistenceError> {
    conn.write_transaction(|conn| {
        let located: Option<(i32, String)> = cms_articles::table
            .filter(cms_articles::id.eq(id))
            .select((cms_articles::year, cms_articles::section))
            .first(conn)
            .optional()?;

        let Some((year, section)) = located else {
            info!(id, "Article already absent");
            return Ok(None);
        };

        let section: ArticleSection =
            section.parse().map_err(|e: ingenium_domain::DomainError| {
                PersistenceError::SerializationError(e.to_string())
            })?;

        diesel::delete(cms_articles::table.filter(cms_articles::id.eq(id))).execute(conn)?;

        info!(id, year, section = section.as_str(), "Deleted article");
        Ok(Some((year, section)))
    })
}
}
