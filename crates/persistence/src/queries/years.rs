// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Year queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{YearRecord, YearStatus};
use tracing::debug;

use crate::diesel_schema::cms_years;
use crate::error::PersistenceError;

/// Diesel Queryable struct for year rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_years)]
struct YearRow {
    year: i32,
    status: String,
    archived_at: Option<String>,
}

impl YearRow {
    fn into_record(self) -> Result<YearRecord, PersistenceError> {
        let status: YearStatus = self
            .status
            .parse()
            .map_err(|e: ingenium_domain::DomainError| {
                PersistenceError::SerializationError(e.to_string())
            })?;
        Ok(YearRecord {
            year: self.year,
            status,
            archived_at: self.archived_at,
        })
    }
}

backend_fn! {
/// Returns the highest year marked current, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn current_year(conn: &mut _) -> Result<Option<i32>, PersistenceError> {
    let year: Option<i32> = cms_years::table
        .filter(cms_years::status.eq(YearStatus::Current.as_str()))
        .order(cms_years::year.desc())
        .select(cms_years::year)
        .first(conn)
        .optional()?;

    debug!(?year, "Looked up current year");
    Ok(year)
}
}

backend_fn! {
/// Lists every year, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored status is unknown.
pub fn list_years(conn: &mut _) -> Result<Vec<YearRecord>, PersistenceError> {
    let rows: Vec<YearRow> = cms_years::table
        .order(cms_years::year.desc())
        .select(YearRow::as_select())
        .load(conn)?;

    rows.into_iter().map(YearRow::into_record).collect()
}
}

backend_fn! {
/// Returns whether `year` exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn year_exists(conn: &mut _, year: i32) -> Result<bool, PersistenceError> {
    Ok(diesel::select(diesel::dsl::exists(
        cms_years::table.filter(cms_years::year.eq(year)),
    ))
    .get_result(conn)?)
}
}
