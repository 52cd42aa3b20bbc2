// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Editorial singleton mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::EditorialContent;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_editorial_content;
use crate::error::PersistenceError;

/// Primary key of the only editorial row.
pub const EDITORIAL_ROW_ID: i32 = 1;

backend_fn! {
/// Overwrites the editorial row, seeding it if it is missing.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn upsert_editorial_content(
    conn: &mut _,
    content: &EditorialContent,
) -> Result<(), PersistenceError> {
    let paragraphs_json: String = serde_json::to_string(&content.content)?;
    let now: String = timestamp_now();

    conn.write_transaction(|conn| {
        let updated: usize = diesel::update(
            cms_editorial_content::table.filter(cms_editorial_content::id.eq(EDITORIAL_ROW_ID)),
        )
        .set((
            cms_editorial_content::title.eq(&content.title),
            cms_editorial_content::author_name.eq(&content.author.name),
            cms_editorial_content::author_role.eq(&content.author.role),
            cms_editorial_content::date_text.eq(&content.date),
            cms_editorial_content::content_paragraphs.eq(&paragraphs_json),
            cms_editorial_content::quote_text.eq(&content.quote.text),
            cms_editorial_content::quote_author.eq(&content.quote.author),
            cms_editorial_content::updated_at.eq(&now),
        ))
        .execute(conn)?;

        if updated == 0 {
            diesel::insert_into(cms_editorial_content::table)
                .values((
                    cms_editorial_content::id.eq(EDITORIAL_ROW_ID),
                    cms_editorial_content::title.eq(&content.title),
                    cms_editorial_content::author_name.eq(&content.author.name),
                    cms_editorial_content::author_role.eq(&content.author.role),
                    cms_editorial_content::date_text.eq(&content.date),
                    cms_editorial_content::content_paragraphs.eq(&paragraphs_json),
                    cms_editorial_content::quote_text.eq(&content.quote.text),
                    cms_editorial_content::quote_author.eq(&content.quote.author),
                    cms_editorial_content::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        Ok(())
    })?;

    info!(title = %content.title, "Saved editorial content");
    Ok(())
}
}
