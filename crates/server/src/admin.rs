// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Admin route handlers.
//!
//! Every handler except login and logout extracts an [`AdminSession`], so
//! the session is validated before the body is parsed or any write runs.

use axum::{
    Json,
    extract::{Query, State as AxumState, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use ingenium_api::{
    AdminResponse, ArchiveResponse, ArticleListQuery, ArticlesResponse, EditorialResponse,
    GalleryItemsResponse, IdQuery, IssuedSession, LoginRequest, OkResponse, ProjectsResponse,
    SectionSettingsResponse, SetCurrentYearRequest, SetCurrentYearResponse, TeamMemberQuery,
    TeamMembersResponse, UpsertArticleRequest, UpsertEditorialRequest, UpsertGalleryItemRequest,
    UpsertProjectRequest, UpsertSectionSettingRequest, UpsertTeamMemberRequest, YearQuery,
    YearsResponse, archive_current_year, delete_article, delete_gallery_item, delete_project,
    delete_team_member, get_editorial, get_section_settings, list_articles, list_gallery_items,
    list_projects, list_team_members, list_years, login, logout, set_current_year,
    upsert_article, upsert_editorial, upsert_gallery_item, upsert_project,
    upsert_section_setting, upsert_team_member, whoami,
};

use crate::session::{AdminSession, cleared_session_cookie, session_cookie, session_token};
use crate::{AppState, HttpError, json_body, run_blocking};

// ============================================================================
// Authentication
// ============================================================================

/// Handler for POST `/api/admin/auth/login`.
///
/// Sets the session cookie on success.
pub async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, HttpError> {
    let request: LoginRequest = json_body(payload)?;
    let secure: bool = app_state.secure_cookies;

    let session: IssuedSession = run_blocking(move || {
        login(
            &app_state.persistence,
            app_state.bootstrap.as_ref(),
            &request,
        )
    })
    .await?;

    let cookie: HeaderValue = session_cookie(&session.token, session.expires_at, secure)?;
    let body: AdminResponse = whoami(&session.admin);
    Ok(([(header::SET_COOKIE, cookie)], Json(body)).into_response())
}

/// Handler for POST `/api/admin/auth/logout`.
///
/// Succeeds with or without a session and always clears the cookie.
pub async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let token: Option<String> = session_token(&headers);
    let secure: bool = app_state.secure_cookies;

    let cleared: HeaderValue = cleared_session_cookie(secure)?;
    let body: OkResponse =
        run_blocking(move || logout(&app_state.persistence, token.as_deref())).await?;

    Ok((
        [(header::SET_COOKIE, cleared)],
        Json(body),
    )
        .into_response())
}

/// Handler for GET `/api/admin/auth/me`.
pub async fn handle_whoami(AdminSession(admin): AdminSession) -> Json<AdminResponse> {
    Json(whoami(&admin))
}

// ============================================================================
// Years
// ============================================================================

/// Handler for GET `/api/admin/years`.
pub async fn handle_list_years(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
) -> Result<Json<YearsResponse>, HttpError> {
    let response: YearsResponse =
        run_blocking(move || list_years(&app_state.persistence, &admin)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/years/current`.
pub async fn handle_set_current_year(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<SetCurrentYearRequest>, JsonRejection>,
) -> Result<Json<SetCurrentYearResponse>, HttpError> {
    let request: SetCurrentYearRequest = json_body(payload)?;
    let response: SetCurrentYearResponse = run_blocking(move || {
        set_current_year(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/archive`.
pub async fn handle_archive(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
) -> Result<Json<ArchiveResponse>, HttpError> {
    let response: ArchiveResponse = run_blocking(move || {
        archive_current_year(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Sections
// ============================================================================

/// Handler for GET `/api/admin/sections?year=`.
pub async fn handle_get_section_settings(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<YearQuery>,
) -> Result<Json<SectionSettingsResponse>, HttpError> {
    let response: SectionSettingsResponse =
        run_blocking(move || get_section_settings(&app_state.persistence, &admin, &query))
            .await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/sections`.
pub async fn handle_upsert_section_setting(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertSectionSettingRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertSectionSettingRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_section_setting(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Articles
// ============================================================================

/// Handler for GET `/api/admin/articles?year=&section=`.
pub async fn handle_list_articles(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<ArticleListQuery>,
) -> Result<Json<ArticlesResponse>, HttpError> {
    let response: ArticlesResponse =
        run_blocking(move || list_articles(&app_state.persistence, &admin, &query)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/articles` and its `/api/admin/blog` alias.
pub async fn handle_upsert_article(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertArticleRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertArticleRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_article(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/admin/articles?id=`.
pub async fn handle_delete_article(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<IdQuery>,
) -> Result<Json<OkResponse>, HttpError> {
    let response: OkResponse = run_blocking(move || {
        delete_article(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &query,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Gallery
// ============================================================================

/// Handler for GET `/api/admin/gallery?year=`.
pub async fn handle_list_gallery_items(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<YearQuery>,
) -> Result<Json<GalleryItemsResponse>, HttpError> {
    let response: GalleryItemsResponse =
        run_blocking(move || list_gallery_items(&app_state.persistence, &admin, &query)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/gallery`.
pub async fn handle_upsert_gallery_item(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertGalleryItemRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertGalleryItemRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_gallery_item(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/admin/gallery?id=`.
pub async fn handle_delete_gallery_item(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<IdQuery>,
) -> Result<Json<OkResponse>, HttpError> {
    let response: OkResponse = run_blocking(move || {
        delete_gallery_item(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &query,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Projects
// ============================================================================

/// Handler for GET `/api/admin/projects?year=`.
pub async fn handle_list_projects(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<YearQuery>,
) -> Result<Json<ProjectsResponse>, HttpError> {
    let response: ProjectsResponse =
        run_blocking(move || list_projects(&app_state.persistence, &admin, &query)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/projects`.
pub async fn handle_upsert_project(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertProjectRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertProjectRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_project(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/admin/projects?id=`.
pub async fn handle_delete_project(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<IdQuery>,
) -> Result<Json<OkResponse>, HttpError> {
    let response: OkResponse = run_blocking(move || {
        delete_project(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &query,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Editorial
// ============================================================================

/// Handler for GET `/api/admin/editorial`.
pub async fn handle_get_editorial(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
) -> Result<Json<EditorialResponse>, HttpError> {
    let response: EditorialResponse =
        run_blocking(move || get_editorial(&app_state.persistence, &admin)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/editorial`.
pub async fn handle_upsert_editorial(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertEditorialRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertEditorialRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_editorial(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

// ============================================================================
// Team
// ============================================================================

/// Handler for GET `/api/admin/team?year=`.
pub async fn handle_list_team_members(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<YearQuery>,
) -> Result<Json<TeamMembersResponse>, HttpError> {
    let response: TeamMembersResponse =
        run_blocking(move || list_team_members(&app_state.persistence, &admin, &query)).await?;
    Ok(Json(response))
}

/// Handler for POST `/api/admin/team`.
pub async fn handle_upsert_team_member(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    payload: Result<Json<UpsertTeamMemberRequest>, JsonRejection>,
) -> Result<Json<OkResponse>, HttpError> {
    let request: UpsertTeamMemberRequest = json_body(payload)?;
    let response: OkResponse = run_blocking(move || {
        upsert_team_member(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &request,
        )
    })
    .await?;
    Ok(Json(response))
}

/// Handler for DELETE `/api/admin/team?year=&id=`.
pub async fn handle_delete_team_member(
    AxumState(app_state): AxumState<AppState>,
    AdminSession(admin): AdminSession,
    Query(query): Query<TeamMemberQuery>,
) -> Result<Json<OkResponse>, HttpError> {
    let response: OkResponse = run_blocking(move || {
        delete_team_member(
            &app_state.persistence,
            app_state.invalidator.as_ref(),
            &admin,
            &query,
        )
    })
    .await?;
    Ok(Json(response))
}
