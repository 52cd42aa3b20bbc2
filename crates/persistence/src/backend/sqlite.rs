// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! This module contains SQLite-specific initialization, migration,
//! and helper functions that cannot be expressed in backend-agnostic
//! Diesel DSL.
//!
//! ## Backend-Specific Code
//!
//! This module is limited to:
//! - Pool connection customization (PRAGMA statements on acquire)
//! - Migration execution and schema bootstrap
//! - Write-lock and row-read helpers used by lifecycle transactions
//!
//! All content queries and mutations must remain backend-agnostic
//! and live in `queries/` or `mutations/` modules.

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::CustomizeConnection;
use diesel::sql_types::Integer;
use diesel::{RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ingenium_domain::YearStatus;
use tracing::info;

use crate::diesel_schema::cms_years;
use crate::error::PersistenceError;
use crate::mutations::seed::seed_defaults_sqlite;

/// SQLite-specific migrations.
///
/// These migrations use `SQLite` syntax and are the default for development
/// and standard testing.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Helper row struct for PRAGMA queries.
///
/// This is a justified use of raw SQL as Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Applies per-connection settings whenever the pool hands out a connection.
///
/// `PRAGMA foreign_keys` is connection-scoped in `SQLite`, so it has to be
/// set on every connection rather than once per database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Returns the highest year marked current.
///
/// The surrounding `BEGIN IMMEDIATE` transaction already holds the
/// database write lock, so no row lock is taken.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn lock_current_year(conn: &mut SqliteConnection) -> Result<Option<i32>, PersistenceError> {
    Ok(cms_years::table
        .filter(cms_years::status.eq(YearStatus::Current.as_str()))
        .order(cms_years::year.desc())
        .select(cms_years::year)
        .first::<i32>(conn)
        .optional()?)
}

/// Returns whether `year` exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn lock_year(conn: &mut SqliteConnection, year: i32) -> Result<bool, PersistenceError> {
    Ok(cms_years::table
        .filter(cms_years::year.eq(year))
        .select(cms_years::year)
        .first::<i32>(conn)
        .optional()?
        .is_some())
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(
    conn: &mut SqliteConnection,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Brings the schema up to date and seeds default rows.
///
/// The whole bootstrap runs inside one `BEGIN IMMEDIATE` transaction, so
/// concurrent first callers (in this or another process) serialize on the
/// database write lock and a failure leaves nothing behind.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `seed_year` - The year to create as current when no years exist
///
/// # Errors
///
/// Returns an error if migrations or seeding fail.
pub fn bootstrap_schema(
    conn: &mut SqliteConnection,
    seed_year: i32,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction(|conn| {
        let pending: bool = conn
            .has_pending_migration(MIGRATIONS)
            .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

        if pending {
            run_migrations(conn).map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
        }

        seed_defaults_sqlite(conn, seed_year)
    })
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}
