// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team member mutations.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{MAX_TEAM_MEMBERS_PER_YEAR, TeamMember};
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_team_members;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or overwrites a team member keyed by `(year, id)`.
///
/// A new id is rejected once the year already has
/// `MAX_TEAM_MEMBERS_PER_YEAR` members; updates never count against the
/// cap. The count and insert run in one write transaction holding the year
/// row lock, so concurrent inserts cannot overshoot the cap.
///
/// # Errors
///
/// Returns `PersistenceError::TeamCapacityExceeded` when the cap is reached,
/// or a database error if the write fails.
pub fn upsert_team_member(conn: &mut _, member: &TeamMember) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();

    conn.write_transaction(|conn| {
        conn.lock_year(member.year)?;

        let existing: bool = diesel::select(exists(
            cms_team_members::table
                .filter(cms_team_members::year.eq(member.year))
                .filter(cms_team_members::id.eq(&member.id)),
        ))
        .get_result(conn)?;

        if existing {
            diesel::update(
                cms_team_members::table
                    .filter(cms_team_members::year.eq(member.year))
                    .filter(cms_team_members::id.eq(&member.id)),
            )
            .set((
                cms_team_members::name.eq(&member.name),
                cms_team_members::role.eq(&member.role),
                cms_team_members::department.eq(&member.department),
                cms_team_members::year_label.eq(&member.year_label),
                cms_team_members::image_id.eq(&member.image_id),
                cms_team_members::linkedin_url.eq(&member.linkedin),
                cms_team_members::github_url.eq(&member.github),
                cms_team_members::updated_at.eq(&now),
            ))
            .execute(conn)?;
            return Ok(());
        }

        let count: i64 = cms_team_members::table
            .filter(cms_team_members::year.eq(member.year))
            .count()
            .get_result(conn)?;

        if count >= MAX_TEAM_MEMBERS_PER_YEAR {
            warn!(year = member.year, count, "Rejected team member over capacity");
            return Err(PersistenceError::TeamCapacityExceeded {
                year: member.year,
                max: MAX_TEAM_MEMBERS_PER_YEAR,
            });
        }

        diesel::insert_into(cms_team_members::table)
            .values((
                cms_team_members::year.eq(member.year),
                cms_team_members::id.eq(&member.id),
                cms_team_members::name.eq(&member.name),
                cms_team_members::role.eq(&member.role),
                cms_team_members::department.eq(&member.department),
                cms_team_members::year_label.eq(&member.year_label),
                cms_team_members::image_id.eq(&member.image_id),
                cms_team_members::linkedin_url.eq(&member.linkedin),
                cms_team_members::github_url.eq(&member.github),
                cms_team_members::created_at.eq(&now),
                cms_team_members::updated_at.eq(&now),
            ))
            .execute(conn)?;

        Ok(())
    })?;

    info!(year = member.year, id = %member.id, "Saved team member");
    Ok(())
}
}

backend_fn! {
/// Deletes a team member by `(year, id)`. Deleting a missing member is not
/// an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_team_member(conn: &mut _, year: i32, id: &str) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        cms_team_members::table
            .filter(cms_team_members::year.eq(year))
            .filter(cms_team_members::id.eq(id)),
    )
    .execute(conn)?;

    info!(year, id, deleted, "Deleted team member");
    Ok(())
}
}
