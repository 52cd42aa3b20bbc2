// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB-specific persistence utilities.
//!
//! ## Purpose
//!
//! This module provides migration, locking, and validation helpers for
//! MySQL/MariaDB database backends. Production deployments select it with a
//! `mysql://` database URL; the standard test suite never touches it.
//!
//! ## Validation
//!
//! Backend validation tests are marked with `#[ignore]` and executed only via
//! `cargo xtask test-mariadb`, which:
//!
//! 1. Starts a `MariaDB` container via Docker
//! 2. Sets required environment variables (`DATABASE_URL`, `INGENIUM_TEST_BACKEND`)
//! 3. Runs ignored tests explicitly
//! 4. Stops and removes the container
//!
//! ## Compilation Requirements
//!
//! `MySQL` support is compiled by default (no feature flags).
//! Compilation requires:
//!
//! - `MySQL` client development libraries (`libmysqlclient-dev` or equivalent)
//! - `pkg-config` for library detection
//!
//! ## Schema Bootstrap
//!
//! `MySQL` DDL commits implicitly, so migrations cannot share a transaction
//! with the seed step. Cold starts are serialized with a named advisory lock
//! (`GET_LOCK`) instead, released on every path.
//!
//! ## Schema Parity Requirements
//!
//! **Migration directories MUST remain schema-equivalent at all times.**
//!
//! `MYSQL_MIGRATIONS` embeds migrations from `migrations_mysql/`. These must be
//! semantically identical to the `SQLite` migrations in `migrations/`:
//!
//! - Same tables
//! - Same columns (semantically equivalent types)
//! - Same constraints (nullability, uniqueness, checks)
//! - Same foreign keys
//! - Same indexes
//!
//! Schema divergence between the two directories is a bug.

use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Nullable, Text};
use diesel::{MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ingenium_domain::YearStatus;
use tracing::{info, warn};

use crate::diesel_schema::cms_years;
use crate::error::PersistenceError;
use crate::mutations::seed::seed_defaults_mysql;

/// Name of the advisory lock serializing schema bootstrap.
const SCHEMA_LOCK_NAME: &str = "ingenium_cms_schema";

/// Seconds to wait for the schema lock before giving up.
const SCHEMA_LOCK_TIMEOUT_SECS: i32 = 30;

/// Result type for foreign key check query.
#[derive(QueryableByName)]
struct ForeignKeyCheck {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// Result of `GET_LOCK` / `RELEASE_LOCK`.
///
/// Both return `1` on success, `0` on timeout or foreign ownership and
/// `NULL` on error.
#[derive(QueryableByName)]
struct LockResult {
    #[diesel(sql_type = Nullable<BigInt>)]
    acquired: Option<i64>,
}

/// `MySQL`-specific migrations.
///
/// These migrations are functionally equivalent to the `SQLite` migrations
/// but use `MySQL`-compatible syntax (e.g., `AUTO_INCREMENT` instead of `AUTOINCREMENT`,
/// `LONGBLOB` instead of `BLOB`, `VARCHAR` keys instead of `TEXT`).
pub const MYSQL_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

/// Run pending migrations on the provided `MySQL` connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut MysqlConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running MySQL database migrations");
    conn.run_pending_migrations(MYSQL_MIGRATIONS)?;
    Ok(())
}

/// Verify that foreign key enforcement is enabled on `MySQL`.
///
/// # Errors
///
/// Returns an error if verification fails.
pub fn verify_foreign_key_enforcement(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    // NOTE: This is raw SQL (justified - Diesel has no system variable query DSL)
    let result: Result<ForeignKeyCheck, _> =
        diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks").get_result(conn);

    match result {
        Ok(check) => {
            if check.fk_checks == 1 {
                info!("MySQL foreign key enforcement is enabled");
                Ok(())
            } else {
                Err(PersistenceError::ForeignKeyEnforcementNotEnabled)
            }
        }
        Err(e) => Err(PersistenceError::QueryFailed(format!(
            "Failed to verify foreign key enforcement: {e}"
        ))),
    }
}

/// Locks and returns the highest year marked current.
///
/// Must be called inside a transaction; the lock is held until it ends.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn lock_current_year(conn: &mut MysqlConnection) -> Result<Option<i32>, PersistenceError> {
    Ok(cms_years::table
        .filter(cms_years::status.eq(YearStatus::Current.as_str()))
        .order(cms_years::year.desc())
        .select(cms_years::year)
        .limit(1)
        .for_update()
        .get_result::<i32>(conn)
        .optional()?)
}

/// Locks the row for `year` and returns whether it exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn lock_year(conn: &mut MysqlConnection, year: i32) -> Result<bool, PersistenceError> {
    Ok(cms_years::table
        .filter(cms_years::year.eq(year))
        .select(cms_years::year)
        .for_update()
        .get_result::<i32>(conn)
        .optional()?
        .is_some())
}

fn acquire_schema_lock(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    // NOTE: raw SQL (justified - Diesel has no advisory lock DSL)
    let result: LockResult = diesel::sql_query("SELECT GET_LOCK(?, ?) AS acquired")
        .bind::<Text, _>(SCHEMA_LOCK_NAME)
        .bind::<Integer, _>(SCHEMA_LOCK_TIMEOUT_SECS)
        .get_result(conn)?;

    if result.acquired == Some(1) {
        Ok(())
    } else {
        Err(PersistenceError::InitializationError(format!(
            "Timed out waiting for schema lock '{SCHEMA_LOCK_NAME}'"
        )))
    }
}

fn release_schema_lock(conn: &mut MysqlConnection) {
    let result: Result<LockResult, diesel::result::Error> =
        diesel::sql_query("SELECT RELEASE_LOCK(?) AS acquired")
            .bind::<Text, _>(SCHEMA_LOCK_NAME)
            .get_result(conn);

    match result {
        Ok(LockResult { acquired: Some(1) }) => {}
        Ok(_) => warn!(lock = SCHEMA_LOCK_NAME, "Schema lock was not held at release"),
        Err(e) => warn!(lock = SCHEMA_LOCK_NAME, error = %e, "Failed to release schema lock"),
    }
}

/// Brings the schema up to date and seeds default rows.
///
/// Holds the named schema lock for the duration; the lock is released
/// whether or not bootstrap succeeds.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `seed_year` - The year to create as current when no years exist
///
/// # Errors
///
/// Returns an error if the lock cannot be taken, or migrations or seeding fail.
pub fn bootstrap_schema(
    conn: &mut MysqlConnection,
    seed_year: i32,
) -> Result<(), PersistenceError> {
    acquire_schema_lock(conn)?;
    let result: Result<(), PersistenceError> = migrate_and_seed(conn, seed_year);
    release_schema_lock(conn);
    result
}

fn migrate_and_seed(conn: &mut MysqlConnection, seed_year: i32) -> Result<(), PersistenceError> {
    let pending: bool = conn
        .has_pending_migration(MYSQL_MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    if pending {
        run_migrations(conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    }

    conn.transaction(|conn| seed_defaults_mysql(conn, seed_year))
}
