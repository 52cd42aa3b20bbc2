// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Section visibility overlay mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::SectionKey;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_section_settings;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts the default row for every section key missing for `year`.
///
/// Existing rows are left untouched. The year row must already exist.
///
/// # Errors
///
/// Returns an error if an insert fails.
pub fn backfill_section_settings(conn: &mut _, year: i32) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();
    let mut inserted: usize = 0;

    for key in SectionKey::ALL {
        inserted += diesel::insert_or_ignore_into(cms_section_settings::table)
            .values((
                cms_section_settings::year.eq(year),
                cms_section_settings::section_key.eq(key.as_str()),
                cms_section_settings::display_name.eq(key.default_display_name()),
                cms_section_settings::is_hidden.eq(0),
                cms_section_settings::updated_at.eq(&now),
            ))
            .execute(conn)?;
    }

    if inserted > 0 {
        debug!(year, inserted, "Backfilled default section settings");
    }

    Ok(())
}
}

backend_fn! {
/// Sets the display name and hidden flag of one section of a year.
///
/// The default rows are backfilled first, so the write is always an
/// update of an existing row. The year row must already exist.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `year` - The year
/// * `section_key` - The section
/// * `display_name` - The resolved (non-blank) display name
/// * `is_hidden` - Whether the section is hidden
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_section_setting(
    conn: &mut _,
    year: i32,
    section_key: SectionKey,
    display_name: &str,
    is_hidden: bool,
) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();

    conn.write_transaction(|conn| {
        conn.backfill_section_settings(year)?;

        diesel::update(
            cms_section_settings::table
                .filter(cms_section_settings::year.eq(year))
                .filter(cms_section_settings::section_key.eq(section_key.as_str())),
        )
        .set((
            cms_section_settings::display_name.eq(display_name),
            cms_section_settings::is_hidden.eq(i32::from(is_hidden)),
            cms_section_settings::updated_at.eq(&now),
        ))
        .execute(conn)?;

        Ok(())
    })?;

    info!(year, section = section_key.as_str(), is_hidden, "Updated section setting");
    Ok(())
}
}
