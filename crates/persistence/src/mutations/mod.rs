// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Mutations use Diesel DSL and are backend-agnostic; write transactions,
//! row locks, and last-insert ids go through the `PersistenceBackend` trait.
//!
//! ## Module Organization
//!
//! - `years`: Year lifecycle (promotion, archival, implicit creation)
//! - `sections`: Section visibility overlay
//! - `articles`, `gallery`, `projects`, `team`, `editorial`: Content repositories
//! - `admin`: Admin users and sessions
//! - `seed`: Default rows written during schema bootstrap

pub mod admin;
pub mod articles;
pub mod editorial;
pub mod gallery;
pub mod projects;
pub mod sections;
pub mod seed;
pub mod team;
pub mod years;
