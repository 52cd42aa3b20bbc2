// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public read-only route handlers. None of these require a session.

use axum::{
    Json,
    extract::{Path, State as AxumState},
    http::{HeaderValue, header},
    response::{IntoResponse, Response},
};
use ingenium_api::{
    ArticleResponse, ArticlesResponse, CurrentYearDataResponse, EditorialResponse,
    GalleryItemsResponse, ItemResponse, NavigationResponse, ProjectsResponse,
    TeamMembersResponse, YearDataResponse, YearsResponse, project_pdf, public_article,
    public_current_year_data, public_editorial, public_gallery, public_gallery_item,
    public_navigation, public_project, public_projects, public_section_articles, public_team,
    public_team_member, public_year_data, public_years,
};
use ingenium_domain::{
    DEFAULT_PDF_FILE_NAME, GalleryItem, PDF_MIME_TYPE, Project, ProjectPdf, TeamMember,
};
use tracing::debug;

use crate::{AppState, HttpError, run_blocking};

const PDF_CACHE_CONTROL: &str = "public, max-age=300";

/// Keeps the characters that are safe inside a quoted header parameter.
fn sanitize_file_name(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && *c != '"' && *c != '\\')
        .collect();
    let cleaned: &str = cleaned.trim();
    if cleaned.is_empty() {
        DEFAULT_PDF_FILE_NAME.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Handler for GET `/api/projects/{year}/{id}/pdf`.
///
/// Streams the stored PDF inline with a five minute public cache.
pub async fn handle_project_pdf(
    AxumState(app_state): AxumState<AppState>,
    Path((year, id)): Path<(String, String)>,
) -> Result<Response, HttpError> {
    let pdf: ProjectPdf =
        run_blocking(move || project_pdf(&app_state.persistence, &year, &id)).await?;

    let content_type: HeaderValue = HeaderValue::from_str(&pdf.mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static(PDF_MIME_TYPE));
    let file_name: String = sanitize_file_name(&pdf.file_name);
    let disposition: HeaderValue =
        HeaderValue::from_str(&format!("inline; filename=\"{file_name}\""))
            .unwrap_or_else(|_| HeaderValue::from_static("inline"));

    debug!(file_name = %file_name, bytes = pdf.bytes.len(), "Serving project PDF");
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
            (
                header::CACHE_CONTROL,
                HeaderValue::from_static(PDF_CACHE_CONTROL),
            ),
        ],
        pdf.bytes,
    )
        .into_response())
}

/// Handler for GET `/api/public/years`.
pub async fn handle_public_years(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<YearsResponse>, HttpError> {
    let response: YearsResponse = run_blocking(move || public_years(&app_state.persistence)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/current`.
pub async fn handle_current_year_data(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CurrentYearDataResponse>, HttpError> {
    let response: CurrentYearDataResponse =
        run_blocking(move || public_current_year_data(&app_state.persistence)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}`.
pub async fn handle_year_data(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<String>,
) -> Result<Json<YearDataResponse>, HttpError> {
    let response: YearDataResponse =
        run_blocking(move || public_year_data(&app_state.persistence, &year)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/sections`.
pub async fn handle_navigation(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<String>,
) -> Result<Json<NavigationResponse>, HttpError> {
    let response: NavigationResponse =
        run_blocking(move || public_navigation(&app_state.persistence, &year)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/sections/{section}/articles`.
pub async fn handle_section_articles(
    AxumState(app_state): AxumState<AppState>,
    Path((year, section)): Path<(String, String)>,
) -> Result<Json<ArticlesResponse>, HttpError> {
    let response: ArticlesResponse = run_blocking(move || {
        public_section_articles(&app_state.persistence, &year, &section)
    })
    .await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/sections/{section}/articles/{id}`.
pub async fn handle_article(
    AxumState(app_state): AxumState<AppState>,
    Path((year, section, id)): Path<(String, String, String)>,
) -> Result<Json<ArticleResponse>, HttpError> {
    let response: ArticleResponse =
        run_blocking(move || public_article(&app_state.persistence, &year, &section, &id))
            .await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/gallery`.
pub async fn handle_gallery(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<String>,
) -> Result<Json<GalleryItemsResponse>, HttpError> {
    let response: GalleryItemsResponse =
        run_blocking(move || public_gallery(&app_state.persistence, &year)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/gallery/{id}`.
pub async fn handle_gallery_item(
    AxumState(app_state): AxumState<AppState>,
    Path((year, id)): Path<(String, String)>,
) -> Result<Json<ItemResponse<GalleryItem>>, HttpError> {
    let response: ItemResponse<GalleryItem> =
        run_blocking(move || public_gallery_item(&app_state.persistence, &year, &id)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/projects`.
pub async fn handle_projects(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<String>,
) -> Result<Json<ProjectsResponse>, HttpError> {
    let response: ProjectsResponse =
        run_blocking(move || public_projects(&app_state.persistence, &year)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/projects/{id}`.
pub async fn handle_project(
    AxumState(app_state): AxumState<AppState>,
    Path((year, id)): Path<(String, String)>,
) -> Result<Json<ItemResponse<Project>>, HttpError> {
    let response: ItemResponse<Project> =
        run_blocking(move || public_project(&app_state.persistence, &year, &id)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/team`.
pub async fn handle_team(
    AxumState(app_state): AxumState<AppState>,
    Path(year): Path<String>,
) -> Result<Json<TeamMembersResponse>, HttpError> {
    let response: TeamMembersResponse =
        run_blocking(move || public_team(&app_state.persistence, &year)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/years/{year}/team/{id}`.
pub async fn handle_team_member(
    AxumState(app_state): AxumState<AppState>,
    Path((year, id)): Path<(String, String)>,
) -> Result<Json<ItemResponse<TeamMember>>, HttpError> {
    let response: ItemResponse<TeamMember> =
        run_blocking(move || public_team_member(&app_state.persistence, &year, &id)).await?;
    Ok(Json(response))
}

/// Handler for GET `/api/public/editorial`.
pub async fn handle_editorial(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<EditorialResponse>, HttpError> {
    let response: EditorialResponse =
        run_blocking(move || public_editorial(&app_state.persistence)).await?;
    Ok(Json(response))
}
