// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! locking, and helper functions that cannot be expressed in
//! backend-agnostic Diesel DSL.
//!
//! ## Backend Support
//!
//! - `sqlite`: `SQLite` backend (default for development and testing)
//! - `mysql`: MySQL/MariaDB backend (validated via opt-in tests)
//!
//! ## Backend-Agnostic Code
//!
//! Most persistence code should be backend-agnostic and use Diesel DSL.
//! Backend-specific code is limited to:
//!
//! - Connection initialization and pool customization
//! - Migration execution and the schema bootstrap lock
//! - Write transactions and row locking
//! - Backend-specific workarounds for missing Diesel DSL features
//!
//! All content queries and mutations live in `queries/` and `mutations/`
//! modules and must work across all supported backends.

pub mod mysql;
pub mod sqlite;

use diesel::{Connection, MysqlConnection, SqliteConnection};

use crate::error::PersistenceError;
use crate::mutations::sections::{
    backfill_section_settings_mysql, backfill_section_settings_sqlite,
};
use crate::mutations::years::{promote_current_year_mysql, promote_current_year_sqlite};

/// Trait for backend-specific operations.
///
/// This trait provides a unified interface for operations that cannot be
/// expressed in backend-agnostic Diesel DSL, such as opening a write
/// transaction or taking a row lock.
///
/// It is also the seam through which one generated mutation reaches a
/// shared building block (section backfill, year promotion) without knowing
/// which backend it was generated for.
pub trait PersistenceBackend: Connection {
    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError>;

    /// Runs `f` inside a write transaction.
    ///
    /// On `SQLite` this is `BEGIN IMMEDIATE`, which takes the database write
    /// lock up front. On `MySQL` it is a plain `BEGIN`; callers that need to
    /// serialize on a row use [`Self::lock_year`] or
    /// [`Self::lock_current_year`] inside the closure.
    ///
    /// Must not be nested.
    ///
    /// # Errors
    ///
    /// Returns the closure's error (after rollback) or a database error.
    fn write_transaction<T, F>(&mut self, f: F) -> Result<T, PersistenceError>
    where
        F: FnOnce(&mut Self) -> Result<T, PersistenceError>;

    /// Reads (and on `MySQL`, row-locks) the current year.
    ///
    /// Returns the highest year marked current, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn lock_current_year(&mut self) -> Result<Option<i32>, PersistenceError>;

    /// Reads (and on `MySQL`, row-locks) a year row.
    ///
    /// Returns whether the year exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn lock_year(&mut self, year: i32) -> Result<bool, PersistenceError>;

    /// Inserts any missing default section settings for `year`.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn backfill_section_settings(&mut self, year: i32) -> Result<(), PersistenceError>;

    /// Promotes `year` to the single current year within the caller's
    /// transaction and returns how many other years were demoted.
    ///
    /// # Errors
    ///
    /// Returns an error if a write fails.
    fn promote_current_year(&mut self, year: i32) -> Result<usize, PersistenceError>;
}

impl PersistenceBackend for SqliteConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(self)
    }

    fn write_transaction<T, F>(&mut self, f: F) -> Result<T, PersistenceError>
    where
        F: FnOnce(&mut Self) -> Result<T, PersistenceError>,
    {
        self.immediate_transaction(f)
    }

    fn lock_current_year(&mut self) -> Result<Option<i32>, PersistenceError> {
        sqlite::lock_current_year(self)
    }

    fn lock_year(&mut self, year: i32) -> Result<bool, PersistenceError> {
        sqlite::lock_year(self, year)
    }

    fn backfill_section_settings(&mut self, year: i32) -> Result<(), PersistenceError> {
        backfill_section_settings_sqlite(self, year)
    }

    fn promote_current_year(&mut self, year: i32) -> Result<usize, PersistenceError> {
        promote_current_year_sqlite(self, year)
    }
}

impl PersistenceBackend for MysqlConnection {
    fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        mysql::verify_foreign_key_enforcement(self)
    }

    fn write_transaction<T, F>(&mut self, f: F) -> Result<T, PersistenceError>
    where
        F: FnOnce(&mut Self) -> Result<T, PersistenceError>,
    {
        self.transaction(f)
    }

    fn lock_current_year(&mut self) -> Result<Option<i32>, PersistenceError> {
        mysql::lock_current_year(self)
    }

    fn lock_year(&mut self, year: i32) -> Result<bool, PersistenceError> {
        mysql::lock_year(self, year)
    }

    fn backfill_section_settings(&mut self, year: i32) -> Result<(), PersistenceError> {
        backfill_section_settings_mysql(self, year)
    }

    fn promote_current_year(&mut self, year: i32) -> Result<usize, PersistenceError> {
        promote_current_year_mysql(self, year)
    }
}
