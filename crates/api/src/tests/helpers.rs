// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use ingenium_domain::Author;
use ingenium_persistence::Persistence;

use crate::{
    AdminBootstrap, AuthenticatedAdmin, IssuedSession, LoginRequest, UpsertArticleRequest,
    UpsertTeamMemberRequest, YearValue, login,
};

pub const TEST_ADMIN_EMAIL: &str = "editor@ingenium.test";
pub const TEST_ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Creates persistence whose current year is 2025.
pub fn setup_test_persistence() -> Persistence {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    persistence
        .set_current_year(2025)
        .expect("Failed to set current year");
    persistence
}

pub fn create_test_bootstrap() -> AdminBootstrap {
    AdminBootstrap::from_config(Some(TEST_ADMIN_EMAIL), Some(TEST_ADMIN_PASSWORD))
        .expect("Bootstrap config should be complete")
}

pub fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

pub fn login_test_admin(persistence: &Persistence) -> IssuedSession {
    let bootstrap: AdminBootstrap = create_test_bootstrap();
    login(
        persistence,
        Some(&bootstrap),
        &login_request(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD),
    )
    .expect("Test admin login should succeed")
}

pub fn create_test_admin(persistence: &Persistence) -> AuthenticatedAdmin {
    login_test_admin(persistence).admin
}

pub fn article_request(id: &str, year: i32, section: &str) -> UpsertArticleRequest {
    UpsertArticleRequest {
        id: id.to_string(),
        year: Some(YearValue::from(year)),
        section: section.to_string(),
        title: format!("Article {id}"),
        excerpt: String::from("Excerpt"),
        date: String::from("April 2025"),
        read_time: String::from("4 min read"),
        author: Author {
            name: String::from("Rahul Das"),
            role: String::from("Columnist"),
        },
        paragraphs: vec![String::from("Opening paragraph.")],
        images: Vec::new(),
    }
}

pub fn team_request(id: &str, year: i32) -> UpsertTeamMemberRequest {
    UpsertTeamMemberRequest {
        year: Some(YearValue::from(year)),
        id: id.to_string(),
        name: format!("Member {id}"),
        role: String::from("Designer"),
        ..UpsertTeamMemberRequest::default()
    }
}
