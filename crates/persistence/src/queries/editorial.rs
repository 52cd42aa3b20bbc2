// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Editorial singleton query.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{Author, EditorialContent, Quote};

use crate::diesel_schema::cms_editorial_content;
use crate::error::PersistenceError;
use crate::mutations::editorial::EDITORIAL_ROW_ID;

/// Diesel Queryable struct for the editorial row.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_editorial_content)]
struct EditorialRow {
    title: String,
    author_name: String,
    author_role: String,
    date_text: String,
    content_paragraphs: String,
    quote_text: String,
    quote_author: String,
}

backend_fn! {
/// Returns the editorial content, or the defaults if no row exists.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
pub fn editorial_content(conn: &mut _) -> Result<EditorialContent, PersistenceError> {
    let row: Option<EditorialRow> = cms_editorial_content::table
        .filter(cms_editorial_content::id.eq(EDITORIAL_ROW_ID))
        .select(EditorialRow::as_select())
        .first(conn)
        .optional()?;

    let Some(row) = row else {
        return Ok(EditorialContent::default());
    };

    Ok(EditorialContent {
        title: row.title,
        author: Author {
            name: row.author_name,
            role: row.author_role,
        },
        date: row.date_text,
        content: serde_json::from_str(&row.content_paragraphs)?,
        quote: Quote {
            text: row.quote_text,
            author: row.quote_author,
        },
    })
}
}
