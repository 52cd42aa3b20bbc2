// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin account and session queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::credentials::hash_session_token;
use crate::data_models::{AdminIdentity, AdminUserData};
use crate::diesel_schema::{admin_sessions, admin_users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for admin user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admin_users)]
struct AdminUserRow {
    id: i64,
    email: String,
    password_hash: String,
}

backend_fn! {
/// Retrieves an admin user by normalized email.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no such user exists.
pub fn find_admin_by_email(
    conn: &mut _,
    email: &str,
) -> Result<Option<AdminUserData>, PersistenceError> {
    debug!(email, "Looking up admin user");

    let row: Option<AdminUserRow> = admin_users::table
        .filter(admin_users::email.eq(email))
        .select(AdminUserRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| AdminUserData {
        id: row.id,
        email: row.email,
        password_hash: row.password_hash,
    }))
}
}

backend_fn! {
/// Resolves a raw session token to its admin, if the session is still
/// valid at `now` (unix seconds).
///
/// Unknown and expired tokens both yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_session_admin(
    conn: &mut _,
    token: &str,
    now: i64,
) -> Result<Option<AdminIdentity>, PersistenceError> {
    let row: Option<(i64, String)> = admin_sessions::table
        .inner_join(admin_users::table)
        .filter(admin_sessions::token_hash.eq(hash_session_token(token)))
        .filter(admin_sessions::expires_at.gt(now))
        .select((admin_users::id, admin_users::email))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, email)| AdminIdentity { id, email }))
}
}
