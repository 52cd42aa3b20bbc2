// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains the read paths of the persistence layer.
//!
//! ## Module Organization
//!
//! - `years`: Current year and year listing
//! - `sections`: Section visibility overlay (backfills known years)
//! - `articles`, `gallery`, `projects`, `team`, `editorial`: Content reads
//! - `admin`: Admin users and session resolution
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active connection pool.

pub mod admin;
pub mod articles;
pub mod editorial;
pub mod gallery;
pub mod projects;
pub mod sections;
pub mod team;
pub mod years;
