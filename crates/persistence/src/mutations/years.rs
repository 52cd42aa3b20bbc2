// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Year lifecycle mutations.
//!
//! Every promotion demotes every other current year in the same
//! transaction, so at most one year is current once it commits.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{ArchiveOutcome, YearStatus};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_years;
use crate::error::PersistenceError;

backend_fn! {
/// Promotes `year` to current inside the caller's transaction.
///
/// The year is created if missing, its archival timestamp is cleared, its
/// section settings are backfilled, and every other current year is
/// demoted (status only).
///
/// # Returns
///
/// The number of years demoted.
///
/// # Errors
///
/// Returns an error if any write fails.
pub fn promote_current_year(conn: &mut _, year: i32) -> Result<usize, PersistenceError> {
    let now: String = timestamp_now();

    let updated: usize = diesel::update(cms_years::table.filter(cms_years::year.eq(year)))
        .set((
            cms_years::status.eq(YearStatus::Current.as_str()),
            cms_years::archived_at.eq(None::<String>),
            cms_years::updated_at.eq(&now),
        ))
        .execute(conn)?;

    if updated == 0 {
        diesel::insert_into(cms_years::table)
            .values((
                cms_years::year.eq(year),
                cms_years::status.eq(YearStatus::Current.as_str()),
                cms_years::created_at.eq(&now),
                cms_years::updated_at.eq(&now),
            ))
            .execute(conn)?;
    }

    conn.backfill_section_settings(year)?;

    let demoted: usize = diesel::update(
        cms_years::table
            .filter(cms_years::year.ne(year))
            .filter(cms_years::status.eq(YearStatus::Current.as_str())),
    )
    .set((
        cms_years::status.eq(YearStatus::Archived.as_str()),
        cms_years::updated_at.eq(&now),
    ))
    .execute(conn)?;

    Ok(demoted)
}
}

backend_fn! {
/// Makes `year` the single current year in one write transaction.
///
/// # Errors
///
/// Returns an error if any step fails; nothing is committed in that case.
pub fn set_current_year(conn: &mut _, year: i32) -> Result<(), PersistenceError> {
    let demoted: usize = conn.write_transaction(|conn| conn.promote_current_year(year))?;

    info!(year, demoted, "Set current year");
    Ok(())
}
}

backend_fn! {
/// Archives the current year and promotes the following year.
///
/// Locks the current-year row, stamps it archived, then promotes
/// `current + 1` (with default section settings) and demotes any stale
/// current rows, all in one write transaction.
///
/// # Errors
///
/// Returns `PersistenceError::NoCurrentYear` if no year is current, or a
/// database error if any step fails.
pub fn archive_current_year_and_create_next(
    conn: &mut _,
) -> Result<ArchiveOutcome, PersistenceError> {
    let outcome: ArchiveOutcome = conn.write_transaction(|conn| {
        let Some(archived_year) = conn.lock_current_year()? else {
            return Err(PersistenceError::NoCurrentYear);
        };
        let new_current_year: i32 = archived_year + 1;
        let now: String = timestamp_now();

        diesel::update(cms_years::table.filter(cms_years::year.eq(archived_year)))
            .set((
                cms_years::status.eq(YearStatus::Archived.as_str()),
                cms_years::archived_at.eq(Some(now.as_str())),
                cms_years::updated_at.eq(&now),
            ))
            .execute(conn)?;

        conn.promote_current_year(new_current_year)?;

        Ok(ArchiveOutcome {
            archived_year,
            new_current_year,
        })
    })?;

    info!(
        archived_year = outcome.archived_year,
        new_current_year = outcome.new_current_year,
        "Archived current year"
    );
    Ok(outcome)
}
}

backend_fn! {
/// Creates `year` as archived if it does not exist and backfills its
/// section settings.
///
/// Content writes call this before writing; the two steps are separate
/// transactions and an orphaned year is harmless.
///
/// # Errors
///
/// Returns an error if a write fails.
pub fn ensure_year_exists(conn: &mut _, year: i32) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();

    let created: usize = conn.write_transaction(|conn| {
        let created: usize = diesel::insert_or_ignore_into(cms_years::table)
            .values((
                cms_years::year.eq(year),
                cms_years::status.eq(YearStatus::Archived.as_str()),
                cms_years::created_at.eq(&now),
                cms_years::updated_at.eq(&now),
            ))
            .execute(conn)?;
        conn.backfill_section_settings(year)?;
        Ok(created)
    })?;

    if created > 0 {
        info!(year, "Created year implicitly as archived");
    }
    Ok(())
}
}
