// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin account and session mutations.
//!
//! Raw session tokens never reach the database; only their digest is
//! stored and matched.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::clock::timestamp_now;
use crate::credentials::{hash_password, hash_session_token};
use crate::diesel_schema::{admin_sessions, admin_users};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts an admin user unless one with `email` already exists.
///
/// Uses `INSERT OR IGNORE` (`INSERT IGNORE` on `MySQL`), so two callers
/// racing to create the same email both succeed and exactly one row is
/// written. Returns whether this call created the row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The normalized (trimmed, lowercase) email
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns an error if hashing or the insert fails.
pub fn insert_admin_user_if_absent(
    conn: &mut _,
    email: &str,
    password: &str,
) -> Result<bool, PersistenceError> {
    let password_hash: String = hash_password(password)?;

    let inserted: usize = diesel::insert_or_ignore_into(admin_users::table)
        .values((
            admin_users::email.eq(email),
            admin_users::password_hash.eq(&password_hash),
            admin_users::created_at.eq(timestamp_now()),
        ))
        .execute(conn)?;

    if inserted > 0 {
        info!(email, "Admin user created");
    } else {
        debug!(email, "Admin user already exists");
    }
    Ok(inserted > 0)
}
}

backend_fn! {
/// Stores a new session for `user_id` under the digest of `token`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `token` - The raw session token
/// * `user_id` - The owning admin
/// * `expires_at` - Expiry as unix seconds
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut _,
    token: &str,
    user_id: i64,
    expires_at: i64,
) -> Result<(), PersistenceError> {
    diesel::insert_into(admin_sessions::table)
        .values((
            admin_sessions::token_hash.eq(hash_session_token(token)),
            admin_sessions::user_id.eq(user_id),
            admin_sessions::expires_at.eq(expires_at),
            admin_sessions::created_at.eq(timestamp_now()),
        ))
        .execute(conn)?;

    info!(user_id, expires_at, "Session created");
    Ok(())
}
}

backend_fn! {
/// Deletes the session matching `token`. Idempotent.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut _, token: &str) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(
        admin_sessions::table.filter(admin_sessions::token_hash.eq(hash_session_token(token))),
    )
    .execute(conn)?;

    debug!(deleted, "Session deleted");
    Ok(())
}
}

backend_fn! {
/// Deletes every session whose expiry is at or before `now`.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(conn: &mut _, now: i64) -> Result<usize, PersistenceError> {
    let deleted: usize =
        diesel::delete(admin_sessions::table.filter(admin_sessions::expires_at.le(now)))
            .execute(conn)?;

    if deleted > 0 {
        info!(deleted, "Purged expired sessions");
    }
    Ok(deleted)
}
}
