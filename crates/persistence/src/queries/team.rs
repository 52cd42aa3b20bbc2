// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Team member queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::TeamMember;
use tracing::debug;

use crate::diesel_schema::cms_team_members;
use crate::error::PersistenceError;

/// Diesel Queryable struct for team member rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_team_members)]
struct TeamMemberRow {
    year: i32,
    id: String,
    name: String,
    role: String,
    department: String,
    year_label: String,
    image_id: String,
    linkedin_url: String,
    github_url: String,
}

impl From<TeamMemberRow> for TeamMember {
    fn from(row: TeamMemberRow) -> Self {
        Self {
            year: row.year,
            id: row.id,
            name: row.name,
            role: row.role,
            department: row.department,
            year_label: row.year_label,
            image_id: row.image_id,
            linkedin: row.linkedin_url,
            github: row.github_url,
        }
    }
}

backend_fn! {
/// Lists the team members of a year, most recently updated first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_team_members(conn: &mut _, year: i32) -> Result<Vec<TeamMember>, PersistenceError> {
    let rows: Vec<TeamMemberRow> = cms_team_members::table
        .filter(cms_team_members::year.eq(year))
        .order((cms_team_members::updated_at.desc(), cms_team_members::id.asc()))
        .select(TeamMemberRow::as_select())
        .load(conn)?;

    debug!(year, count = rows.len(), "Listed team members");
    Ok(rows.into_iter().map(TeamMember::from).collect())
}
}

backend_fn! {
/// Retrieves one team member by `(year, id)`.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no such member exists.
pub fn get_team_member(
    conn: &mut _,
    year: i32,
    id: &str,
) -> Result<Option<TeamMember>, PersistenceError> {
    Ok(cms_team_members::table
        .filter(cms_team_members::year.eq(year))
        .filter(cms_team_members::id.eq(id))
        .select(TeamMemberRow::as_select())
        .first(conn)
        .optional()?
        .map(TeamMember::from))
}
}
