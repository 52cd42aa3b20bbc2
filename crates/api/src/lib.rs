// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Ingenium CMS.
//!
//! This crate sits between the HTTP server and persistence. It owns
//! request validation, admin authentication, translation of domain and
//! storage failures into [`ApiError`], and page invalidation after writes.
//! It has no knowledge of HTTP itself.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod invalidation;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AdminBootstrap, AuthenticatedAdmin, AuthenticationService, IssuedSession, normalize_email,
};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    archive_current_year, authenticate, delete_article, delete_gallery_item, delete_project,
    delete_team_member, get_editorial, get_section_settings, list_articles, list_gallery_items,
    list_projects, list_team_members, list_years, login, logout, project_pdf, public_article,
    public_current_year_data, public_editorial, public_gallery, public_gallery_item,
    public_navigation, public_project, public_projects, public_section_articles, public_team,
    public_team_member, public_year_data, public_years, set_current_year, upsert_article,
    upsert_editorial, upsert_gallery_item, upsert_project, upsert_section_setting,
    upsert_team_member, whoami,
};
#[cfg(any(test, feature = "test-support"))]
pub use invalidation::RecordingInvalidator;
pub use invalidation::{ContentChange, PageInvalidator, TracingInvalidator, invalidate};
pub use request_response::{
    AdminResponse, ArchiveResponse, ArticleListQuery, ArticleResponse, ArticlesResponse,
    CurrentYearDataResponse, EditorialResponse, ErrorResponse, GalleryItemsResponse, IdQuery,
    ItemResponse, ItemsResponse, LoginRequest, NavigationResponse, OkResponse, ProjectsResponse,
    SectionSettingsResponse, SetCurrentYearRequest, SetCurrentYearResponse, TeamMemberQuery,
    TeamMembersResponse, UploadedPdfRequest, UpsertArticleRequest, UpsertEditorialRequest,
    UpsertGalleryItemRequest, UpsertProjectRequest, UpsertSectionSettingRequest,
    UpsertTeamMemberRequest, YearDataResponse, YearQuery, YearValue, YearsResponse,
    resolve_query_year, resolve_year,
};
