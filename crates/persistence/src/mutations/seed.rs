// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Default rows written during schema bootstrap.
//!
//! Every step is insert-if-absent, so seeding a database that is already
//! seeded changes nothing.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{EditorialContent, YearStatus};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::{cms_editorial_content, cms_years};
use crate::error::PersistenceError;
use crate::mutations::editorial::EDITORIAL_ROW_ID;

backend_fn! {
/// Seeds the current year, section settings, and the editorial row.
///
/// - `seed_year` is created as the current year only if no years exist.
/// - Every existing year gets its missing default section settings.
/// - The editorial row is created with default content if absent.
///
/// Runs inside the bootstrap transaction.
///
/// # Errors
///
/// Returns an error if any write fails.
pub fn seed_defaults(conn: &mut _, seed_year: i32) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();

    let year_count: i64 = cms_years::table.count().get_result(conn)?;
    if year_count == 0 {
        diesel::insert_into(cms_years::table)
            .values((
                cms_years::year.eq(seed_year),
                cms_years::status.eq(YearStatus::Current.as_str()),
                cms_years::created_at.eq(&now),
                cms_years::updated_at.eq(&now),
            ))
            .execute(conn)?;
        info!(year = seed_year, "Seeded initial current year");
    }

    let years: Vec<i32> = cms_years::table
        .select(cms_years::year)
        .order(cms_years::year.asc())
        .load(conn)?;
    for year in years {
        conn.backfill_section_settings(year)?;
    }

    let defaults: EditorialContent = EditorialContent::default();
    let paragraphs_json: String = serde_json::to_string(&defaults.content)?;
    diesel::insert_or_ignore_into(cms_editorial_content::table)
        .values((
            cms_editorial_content::id.eq(EDITORIAL_ROW_ID),
            cms_editorial_content::title.eq(&defaults.title),
            cms_editorial_content::author_name.eq(&defaults.author.name),
            cms_editorial_content::author_role.eq(&defaults.author.role),
            cms_editorial_content::date_text.eq(&defaults.date),
            cms_editorial_content::content_paragraphs.eq(&paragraphs_json),
            cms_editorial_content::quote_text.eq(&defaults.quote.text),
            cms_editorial_content::quote_author.eq(&defaults.quote.author),
            cms_editorial_content::updated_at.eq(&now),
        ))
        .execute(conn)?;

    Ok(())
}
}
