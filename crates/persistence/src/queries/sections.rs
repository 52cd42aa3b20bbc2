// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Section visibility overlay queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{SectionKey, SectionSetting};
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{cms_section_settings, cms_years};
use crate::error::PersistenceError;

/// Diesel Queryable struct for section setting rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_section_settings)]
struct SectionSettingRow {
    year: i32,
    section_key: String,
    display_name: String,
    is_hidden: i32,
}

impl SectionSettingRow {
    fn into_setting(self) -> Result<SectionSetting, PersistenceError> {
        let section_key: SectionKey = self
            .section_key
            .parse()
            .map_err(|e: ingenium_domain::DomainError| {
                PersistenceError::SerializationError(e.to_string())
            })?;
        Ok(SectionSetting {
            year: self.year,
            section_key,
            display_name: self.display_name,
            is_hidden: self.is_hidden != 0,
        })
    }
}

backend_fn! {
/// Returns the six section settings of `year`, ordered by section key.
///
/// For an existing year, missing rows are backfilled first. A year that
/// does not exist yields the defaults without writing anything.
///
/// # Errors
///
/// Returns an error if the query or backfill fails.
pub fn section_settings(conn: &mut _, year: i32) -> Result<Vec<SectionSetting>, PersistenceError> {
    let year_known: bool = diesel::select(diesel::dsl::exists(
        cms_years::table.filter(cms_years::year.eq(year)),
    ))
    .get_result(conn)?;

    if !year_known {
        debug!(year, "Year not found, using default section settings");
        return Ok(SectionSetting::defaults_for_year(year));
    }

    conn.backfill_section_settings(year)?;

    let rows: Vec<SectionSettingRow> = cms_section_settings::table
        .filter(cms_section_settings::year.eq(year))
        .order(cms_section_settings::section_key.asc())
        .select(SectionSettingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SectionSettingRow::into_setting).collect()
}
}
