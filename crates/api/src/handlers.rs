// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for admin writes and public reads.
//!
//! Admin handlers take an [`AuthenticatedAdmin`], so a write cannot be
//! expressed without a validated session. Every successful write reports
//! its [`ContentChange`] to the supplied [`PageInvalidator`].

use ingenium_domain::{
    Article, ArticleSection, ArchiveOutcome, CurrentYearData, EditorialContent, GalleryItem,
    GalleryKind, HomeData, MAX_ID_LENGTH, MAX_SHORT_TEXT_LENGTH, PdfUpload, Project,
    ProjectInput, ProjectPdf, ProjectTeam, SectionKey, SectionSetting, TeamMember, YearRecord,
    is_section_hidden, require_non_empty, resolve_display_name, validate_lengths,
    visible_sections,
};
use ingenium_persistence::Persistence;
use tracing::{debug, info};

use crate::auth::{AdminBootstrap, AuthenticatedAdmin, AuthenticationService, IssuedSession};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::invalidation::{ContentChange, PageInvalidator, invalidate};
use crate::request_response::{
    AdminResponse, ArchiveResponse, ArticleListQuery, ArticleResponse, ArticlesResponse,
    CurrentYearDataResponse, EditorialResponse, GalleryItemsResponse, IdQuery, ItemResponse,
    LoginRequest, NavigationResponse, OkResponse, ProjectsResponse, SectionSettingsResponse,
    SetCurrentYearRequest, SetCurrentYearResponse, TeamMemberQuery, TeamMembersResponse,
    UpsertArticleRequest, UpsertEditorialRequest, UpsertGalleryItemRequest, UpsertProjectRequest,
    UpsertSectionSettingRequest, UpsertTeamMemberRequest, YearDataResponse, YearQuery,
    YearsResponse, resolve_query_year, resolve_year,
};

const INVALID_PAYLOAD: &str = "Invalid payload";
const INVALID_REQUEST: &str = "Invalid request";
const MISSING_ID: &str = "Missing id";

fn required_id(query: &IdQuery) -> Result<&str, ApiError> {
    query
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::invalid_input("id", MISSING_ID))
}

// ============================================================================
// Authentication
// ============================================================================

/// Authenticates an admin and issues a session.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if either credential is blank,
/// `ApiError::AuthenticationFailed` if they do not match an admin, and
/// `ApiError::Internal` if storage fails.
pub fn login(
    persistence: &Persistence,
    bootstrap: Option<&AdminBootstrap>,
    request: &LoginRequest,
) -> Result<IssuedSession, ApiError> {
    let email: &str = request.email.as_deref().unwrap_or_default().trim();
    let password: &str = request.password.as_deref().unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::invalid_input(
            "credentials",
            "Email and password are required.",
        ));
    }

    Ok(AuthenticationService::login(
        persistence,
        bootstrap,
        email,
        password,
    )?)
}

/// Resolves a session token to its admin.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for a missing, unknown, or expired
/// token.
pub fn authenticate(
    persistence: &Persistence,
    session_token: Option<&str>,
) -> Result<AuthenticatedAdmin, ApiError> {
    Ok(AuthenticationService::validate_session(
        persistence,
        session_token,
    )?)
}

/// Ends the session, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(
    persistence: &Persistence,
    session_token: Option<&str>,
) -> Result<OkResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(OkResponse::success())
}

/// Returns the authenticated admin.
#[must_use]
pub fn whoami(admin: &AuthenticatedAdmin) -> AdminResponse {
    AdminResponse {
        ok: true,
        user: admin.clone(),
    }
}

// ============================================================================
// Years
// ============================================================================

/// Lists every year and the current one.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn list_years(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
) -> Result<YearsResponse, ApiError> {
    let years: Vec<YearRecord> = persistence
        .list_years()
        .map_err(translate_persistence_error)?;
    let current_year: i32 = persistence
        .current_year()
        .map_err(translate_persistence_error)?;

    Ok(YearsResponse {
        ok: true,
        years,
        current_year,
    })
}

/// Makes a year current, creating it if needed.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, or an error if
/// storage fails.
pub fn set_current_year(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &SetCurrentYearRequest,
) -> Result<SetCurrentYearResponse, ApiError> {
    let year: i32 = resolve_year(request.year.as_ref())?;
    persistence
        .set_current_year(year)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, year, "Set current year");
    invalidate(invalidator, &ContentChange::CurrentYearSet { year });
    Ok(SetCurrentYearResponse { ok: true, year })
}

/// Archives the current year and promotes the next one.
///
/// # Errors
///
/// Returns `ApiError::InvariantViolation` if no year is current, or an
/// error if storage fails.
pub fn archive_current_year(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
) -> Result<ArchiveResponse, ApiError> {
    let outcome: ArchiveOutcome = persistence
        .archive_current_year_and_create_next()
        .map_err(translate_persistence_error)?;

    info!(
        admin_id = admin.id,
        archived_year = outcome.archived_year,
        new_current_year = outcome.new_current_year,
        "Archived year"
    );
    invalidate(
        invalidator,
        &ContentChange::YearArchived {
            archived_year: outcome.archived_year,
        },
    );
    Ok(ArchiveResponse {
        ok: true,
        archived_year: outcome.archived_year,
        new_current_year: outcome.new_current_year,
    })
}

// ============================================================================
// Sections
// ============================================================================

/// Returns the six section settings of a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, or an error if
/// storage fails.
pub fn get_section_settings(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
    query: &YearQuery,
) -> Result<SectionSettingsResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())?;
    let settings: Vec<SectionSetting> = persistence
        .section_settings(year)
        .map_err(translate_persistence_error)?;
    Ok(SectionSettingsResponse { ok: true, settings })
}

/// Creates or replaces one section setting.
///
/// A blank display name falls back to the section key.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year or section key, or
/// an error if storage fails.
pub fn upsert_section_setting(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertSectionSettingRequest,
) -> Result<OkResponse, ApiError> {
    let year: i32 = resolve_year(request.year.as_ref())
        .map_err(|_| ApiError::invalid_input("year", INVALID_PAYLOAD))?;
    let section_key: SectionKey = request
        .section_key
        .parse()
        .map_err(|_| ApiError::invalid_input("sectionKey", INVALID_PAYLOAD))?;
    let display_name: String = resolve_display_name(&request.display_name, section_key);
    validate_lengths(&[("displayName", display_name.as_str(), MAX_SHORT_TEXT_LENGTH)])
        .map_err(|_| ApiError::invalid_input("displayName", INVALID_PAYLOAD))?;

    persistence
        .upsert_section_setting(year, section_key, &display_name, request.is_hidden)
        .map_err(translate_persistence_error)?;

    info!(
        admin_id = admin.id,
        year,
        section_key = section_key.as_str(),
        is_hidden = request.is_hidden,
        "Saved section setting"
    );
    invalidate(invalidator, &ContentChange::SectionSettingSaved { year });
    Ok(OkResponse::success())
}

// ============================================================================
// Articles
// ============================================================================

/// Lists the articles of one section of a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year or section, or an
/// error if storage fails.
pub fn list_articles(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
    query: &ArticleListQuery,
) -> Result<ArticlesResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())?;
    let section: ArticleSection = query
        .section
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(translate_domain_error)?;

    let articles: Vec<Article> = persistence
        .list_section_articles(year, section)
        .map_err(translate_persistence_error)?;
    Ok(ArticlesResponse { ok: true, articles })
}

/// Creates or replaces an article by id.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid section, year, or id,
/// or an error if storage fails.
pub fn upsert_article(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertArticleRequest,
) -> Result<OkResponse, ApiError> {
    let section: ArticleSection = request.section.parse().map_err(translate_domain_error)?;
    let year: i32 = resolve_year(request.year.as_ref())?;
    let id: String = require_non_empty("id", &request.id).map_err(translate_domain_error)?;

    let article = Article {
        id,
        year,
        section,
        title: request.title.clone(),
        excerpt: request.excerpt.clone(),
        date: request.date.clone(),
        read_time: request.read_time.clone(),
        author: request.author.clone(),
        paragraphs: request.paragraphs.clone(),
        images: request.images.clone(),
    };
    validate_lengths(&[
        ("id", article.id.as_str(), MAX_ID_LENGTH),
        ("date", article.date.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("readTime", article.read_time.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("author.name", article.author.name.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("author.role", article.author.role.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .map_err(translate_domain_error)?;
    persistence
        .upsert_article(&article)
        .map_err(translate_persistence_error)?;

    info!(
        admin_id = admin.id,
        year,
        section = section.as_str(),
        id = %article.id,
        "Saved article"
    );
    invalidate(invalidator, &ContentChange::ArticleSaved { year, section });
    Ok(OkResponse::success())
}

/// Deletes an article by id. Deleting an absent id succeeds without
/// invalidating any page.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the id is missing, or an error if
/// storage fails.
pub fn delete_article(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    query: &IdQuery,
) -> Result<OkResponse, ApiError> {
    let id: &str = required_id(query)?;
    let removed: Option<(i32, ArticleSection)> = persistence
        .delete_article(id)
        .map_err(translate_persistence_error)?;

    if let Some((year, section)) = removed {
        info!(admin_id = admin.id, id, year, "Deleted article");
        invalidate(invalidator, &ContentChange::ArticleDeleted { year, section });
    } else {
        info!(admin_id = admin.id, id, "Article already absent");
    }
    Ok(OkResponse::success())
}

// ============================================================================
// Gallery
// ============================================================================

/// Lists the gallery items of a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, or an error if
/// storage fails.
pub fn list_gallery_items(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
    query: &YearQuery,
) -> Result<GalleryItemsResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())?;
    let items: Vec<GalleryItem> = persistence
        .list_gallery_items(year)
        .map_err(translate_persistence_error)?;
    Ok(GalleryItemsResponse { ok: true, items })
}

/// Creates or replaces a gallery item by id.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid kind, year, or id, or
/// an error if storage fails.
pub fn upsert_gallery_item(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertGalleryItemRequest,
) -> Result<OkResponse, ApiError> {
    let kind: GalleryKind = request.kind.parse().map_err(translate_domain_error)?;
    let year: i32 = resolve_year(request.year.as_ref())?;
    let id: String = require_non_empty("id", &request.id).map_err(translate_domain_error)?;

    let item = GalleryItem {
        id,
        year,
        kind,
        title: request.title.clone(),
        description: request.description.clone(),
        image_id: request.image_id.clone(),
        photographer: request.photographer.clone(),
        rank: request.rank.clone(),
        folder_context: request.folder_context.clone(),
    };
    validate_lengths(&[
        ("id", item.id.as_str(), MAX_ID_LENGTH),
        ("photographer.name", item.photographer.name.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("photographer.dept", item.photographer.dept.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("photographer.year", item.photographer.year.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("rank", item.rank.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("folderContext", item.folder_context.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .map_err(translate_domain_error)?;
    persistence
        .upsert_gallery_item(&item)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, year, id = %item.id, kind = kind.as_str(), "Saved gallery item");
    invalidate(invalidator, &ContentChange::GalleryItemSaved { year });
    Ok(OkResponse::success())
}

/// Deletes a gallery item by id. Deleting an absent id succeeds.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the id is missing, or an error if
/// storage fails.
pub fn delete_gallery_item(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    query: &IdQuery,
) -> Result<OkResponse, ApiError> {
    let id: &str = required_id(query)?;
    persistence
        .delete_gallery_item(id)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, id, "Deleted gallery item");
    invalidate(invalidator, &ContentChange::GalleryItemDeleted);
    Ok(OkResponse::success())
}

// ============================================================================
// Projects
// ============================================================================

/// Lists the projects of a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, or an error if
/// storage fails.
pub fn list_projects(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
    query: &YearQuery,
) -> Result<ProjectsResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())?;
    let items: Vec<Project> = persistence
        .list_projects(year)
        .map_err(translate_persistence_error)?;
    Ok(ProjectsResponse { ok: true, items })
}

/// Creates or replaces a project by id.
///
/// An `uploadedPdf` with a blank `dataUrl` counts as no upload. Without an
/// upload, a `pdfLink` that is not the project's internal path drops any
/// stored PDF.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, id, or upload,
/// or an error if storage fails.
pub fn upsert_project(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertProjectRequest,
) -> Result<OkResponse, ApiError> {
    let year: i32 = resolve_year(request.year.as_ref())?;
    let id: String = require_non_empty("id", &request.id).map_err(translate_domain_error)?;
    validate_lengths(&[
        ("id", id.as_str(), MAX_ID_LENGTH),
        ("category", request.category.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("teamName", request.team_name.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("createdAt", request.created_at.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .map_err(translate_domain_error)?;

    let uploaded_pdf: Option<PdfUpload> = match &request.uploaded_pdf {
        Some(upload) if !upload.data_url.trim().is_empty() => Some(
            PdfUpload::from_data_url(&upload.data_url, &upload.file_name)
                .map_err(translate_domain_error)?,
        ),
        _ => None,
    };
    if let Some(pdf) = &uploaded_pdf {
        validate_lengths(&[("fileName", pdf.file_name.as_str(), MAX_SHORT_TEXT_LENGTH)])
            .map_err(translate_domain_error)?;
    }
    let uploaded: bool = uploaded_pdf.is_some();

    let input = ProjectInput {
        id,
        year,
        title: request.title.clone(),
        excerpt: request.excerpt.clone(),
        category: request.category.clone(),
        team: ProjectTeam {
            name: request.team_name.clone(),
        },
        pdf_link: request.pdf_link.clone(),
        problem_statement: request.problem_statement.clone(),
        files: request.files.clone(),
        tech_stack: request.tech_stack.clone(),
        created_at: request.created_at.clone(),
        uploaded_pdf,
    };
    persistence
        .upsert_project(&input)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, year, id = %input.id, uploaded, "Saved project");
    invalidate(
        invalidator,
        &ContentChange::ProjectSaved {
            year,
            id: input.id.clone(),
        },
    );
    Ok(OkResponse::success())
}

/// Deletes a project and its PDF. Deleting an absent id succeeds.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the id is missing, or an error if
/// storage fails.
pub fn delete_project(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    query: &IdQuery,
) -> Result<OkResponse, ApiError> {
    let id: &str = required_id(query)?;
    persistence
        .delete_project(id)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, id, "Deleted project");
    invalidate(invalidator, &ContentChange::ProjectDeleted);
    Ok(OkResponse::success())
}

// ============================================================================
// Editorial
// ============================================================================

/// Returns the editorial, or its defaults if never saved.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn get_editorial(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
) -> Result<EditorialResponse, ApiError> {
    let editorial: EditorialContent = persistence
        .editorial_content()
        .map_err(translate_persistence_error)?;
    Ok(EditorialResponse {
        ok: true,
        editorial,
    })
}

/// Overwrites the editorial.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn upsert_editorial(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertEditorialRequest,
) -> Result<OkResponse, ApiError> {
    let content = EditorialContent {
        title: request.title.clone(),
        author: request.author.clone(),
        date: request.date.clone(),
        content: request.content.clone(),
        quote: request.quote.clone(),
    };
    validate_lengths(&[
        ("author.name", content.author.name.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("author.role", content.author.role.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("date", content.date.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("quote.author", content.quote.author.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .map_err(translate_domain_error)?;
    persistence
        .upsert_editorial_content(&content)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, "Saved editorial");
    invalidate(invalidator, &ContentChange::EditorialSaved);
    Ok(OkResponse::success())
}

// ============================================================================
// Team
// ============================================================================

/// Lists the team members of a year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year, or an error if
/// storage fails.
pub fn list_team_members(
    persistence: &Persistence,
    _admin: &AuthenticatedAdmin,
    query: &YearQuery,
) -> Result<TeamMembersResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())?;
    let items: Vec<TeamMember> = persistence
        .list_team_members(year)
        .map_err(translate_persistence_error)?;
    Ok(TeamMembersResponse { ok: true, items })
}

/// Creates or replaces a team member by `(year, id)`.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year, id, or name is invalid,
/// `ApiError::CapacityExceeded` if a new member would exceed the yearly
/// cap, or an error if storage fails.
pub fn upsert_team_member(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    request: &UpsertTeamMemberRequest,
) -> Result<OkResponse, ApiError> {
    let invalid = || ApiError::invalid_input("team", INVALID_PAYLOAD);
    let year: i32 = resolve_year(request.year.as_ref()).map_err(|_| invalid())?;
    let id: String = require_non_empty("id", &request.id).map_err(|_| invalid())?;
    let name: String = require_non_empty("name", &request.name).map_err(|_| invalid())?;

    let member = TeamMember {
        year,
        id,
        name,
        role: request.role.clone(),
        department: request.department.clone(),
        year_label: request.year_label.clone(),
        image_id: request.image_id.clone(),
        linkedin: request.linkedin.clone(),
        github: request.github.clone(),
    };
    validate_lengths(&[
        ("id", member.id.as_str(), MAX_ID_LENGTH),
        ("name", member.name.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("role", member.role.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("department", member.department.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("yearLabel", member.year_label.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .map_err(|_| invalid())?;
    persistence
        .upsert_team_member(&member)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, year, id = %member.id, "Saved team member");
    invalidate(invalidator, &ContentChange::TeamChanged { year });
    Ok(OkResponse::success())
}

/// Deletes a team member by `(year, id)`. Deleting an absent member
/// succeeds.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year or id is invalid, or an
/// error if storage fails.
pub fn delete_team_member(
    persistence: &Persistence,
    invalidator: &dyn PageInvalidator,
    admin: &AuthenticatedAdmin,
    query: &TeamMemberQuery,
) -> Result<OkResponse, ApiError> {
    let year: i32 = resolve_query_year(query.year.as_deref())
        .map_err(|_| ApiError::invalid_input("year", INVALID_REQUEST))?;
    let id: &str = query
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::invalid_input("id", INVALID_REQUEST))?;

    persistence
        .delete_team_member(year, id)
        .map_err(translate_persistence_error)?;

    info!(admin_id = admin.id, year, id, "Deleted team member");
    invalidate(invalidator, &ContentChange::TeamChanged { year });
    Ok(OkResponse::success())
}

// ============================================================================
// Public reads
// ============================================================================

/// Validates a path year and requires it to be public.
fn public_year(persistence: &Persistence, raw: &str) -> Result<i32, ApiError> {
    let year: i32 = resolve_query_year(Some(raw))?;
    let years: Vec<YearRecord> = persistence
        .public_years()
        .map_err(translate_persistence_error)?;
    if years.iter().any(|record| record.year == year) {
        Ok(year)
    } else {
        debug!(year, "Rejected non-public year");
        Err(ApiError::not_found("Year", year.to_string()))
    }
}

fn visible_article_section(
    persistence: &Persistence,
    year: i32,
    raw_section: &str,
) -> Result<ArticleSection, ApiError> {
    let section: ArticleSection = raw_section.parse().map_err(translate_domain_error)?;
    let settings: Vec<SectionSetting> = persistence
        .section_settings(year)
        .map_err(translate_persistence_error)?;
    if is_section_hidden(&settings, section.section_key()) {
        return Err(ApiError::not_found("Section", section.as_str().to_string()));
    }
    Ok(section)
}

/// Lists the public years, newest first, with the current year.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn public_years(persistence: &Persistence) -> Result<YearsResponse, ApiError> {
    let years: Vec<YearRecord> = persistence
        .public_years()
        .map_err(translate_persistence_error)?;
    let current_year: i32 = persistence
        .current_year()
        .map_err(translate_persistence_error)?;
    Ok(YearsResponse {
        ok: true,
        years,
        current_year,
    })
}

/// Returns the current year's aggregated articles.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn public_current_year_data(
    persistence: &Persistence,
) -> Result<CurrentYearDataResponse, ApiError> {
    let current: CurrentYearData = persistence
        .current_year_data()
        .map_err(translate_persistence_error)?;
    Ok(CurrentYearDataResponse {
        ok: true,
        current_year: current.current_year,
        data: current.data,
    })
}

/// Returns a public year's aggregated articles.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year,
/// `ApiError::ResourceNotFound` for a year that is not public, or an error
/// if storage fails.
pub fn public_year_data(
    persistence: &Persistence,
    year: &str,
) -> Result<YearDataResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let data: HomeData = persistence
        .year_data(year)
        .map_err(translate_persistence_error)?;
    Ok(YearDataResponse {
        ok: true,
        year,
        data,
    })
}

/// Returns a public year's visible sections in navigation order.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year,
/// `ApiError::ResourceNotFound` for a year that is not public, or an error
/// if storage fails.
pub fn public_navigation(
    persistence: &Persistence,
    year: &str,
) -> Result<NavigationResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let settings: Vec<SectionSetting> = persistence
        .section_settings(year)
        .map_err(translate_persistence_error)?;
    Ok(NavigationResponse {
        ok: true,
        year,
        sections: visible_sections(&settings),
    })
}

/// Lists the articles of a visible section of a public year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year or section,
/// `ApiError::ResourceNotFound` for a non-public year or hidden section,
/// or an error if storage fails.
pub fn public_section_articles(
    persistence: &Persistence,
    year: &str,
    section: &str,
) -> Result<ArticlesResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let section: ArticleSection = visible_article_section(persistence, year, section)?;
    let articles: Vec<Article> = persistence
        .list_section_articles(year, section)
        .map_err(translate_persistence_error)?;
    Ok(ArticlesResponse { ok: true, articles })
}

/// Returns one article of a visible section of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public, the
/// section is hidden, or the article does not exist in that section.
pub fn public_article(
    persistence: &Persistence,
    year: &str,
    section: &str,
    id: &str,
) -> Result<ArticleResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let section: ArticleSection = visible_article_section(persistence, year, section)?;
    let article: Article = persistence
        .get_article(year, section, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("Article", id.to_string()))?;
    Ok(ArticleResponse { ok: true, article })
}

/// Lists the gallery items of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public.
pub fn public_gallery(
    persistence: &Persistence,
    year: &str,
) -> Result<GalleryItemsResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let items: Vec<GalleryItem> = persistence
        .list_gallery_items(year)
        .map_err(translate_persistence_error)?;
    Ok(GalleryItemsResponse { ok: true, items })
}

/// Returns one gallery item of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public or the
/// item does not exist.
pub fn public_gallery_item(
    persistence: &Persistence,
    year: &str,
    id: &str,
) -> Result<ItemResponse<GalleryItem>, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let item: GalleryItem = persistence
        .get_gallery_item(year, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("GalleryItem", id.to_string()))?;
    Ok(ItemResponse { ok: true, item })
}

/// Lists the projects of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public.
pub fn public_projects(
    persistence: &Persistence,
    year: &str,
) -> Result<ProjectsResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let items: Vec<Project> = persistence
        .list_projects(year)
        .map_err(translate_persistence_error)?;
    Ok(ProjectsResponse { ok: true, items })
}

/// Returns one project of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public or the
/// project does not exist.
pub fn public_project(
    persistence: &Persistence,
    year: &str,
    id: &str,
) -> Result<ItemResponse<Project>, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let item: Project = persistence
        .get_project(year, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("Project", id.to_string()))?;
    Ok(ItemResponse { ok: true, item })
}

/// Lists the team members of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public.
pub fn public_team(
    persistence: &Persistence,
    year: &str,
) -> Result<TeamMembersResponse, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let items: Vec<TeamMember> = persistence
        .list_team_members(year)
        .map_err(translate_persistence_error)?;
    Ok(TeamMembersResponse { ok: true, items })
}

/// Returns one team member of a public year.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the year is not public or the
/// member does not exist.
pub fn public_team_member(
    persistence: &Persistence,
    year: &str,
    id: &str,
) -> Result<ItemResponse<TeamMember>, ApiError> {
    let year: i32 = public_year(persistence, year)?;
    let item: TeamMember = persistence
        .get_team_member(year, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("TeamMember", id.to_string()))?;
    Ok(ItemResponse { ok: true, item })
}

/// Returns the editorial.
///
/// # Errors
///
/// Returns an error if storage fails.
pub fn public_editorial(persistence: &Persistence) -> Result<EditorialResponse, ApiError> {
    let editorial: EditorialContent = persistence
        .editorial_content()
        .map_err(translate_persistence_error)?;
    Ok(EditorialResponse {
        ok: true,
        editorial,
    })
}

/// Returns the uploaded PDF of a project.
///
/// Unlike the other public reads this does not require the year to be
/// public; the internal link is what readers follow.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an invalid year or blank id, and
/// `ApiError::ResourceNotFound` if no PDF is stored.
pub fn project_pdf(
    persistence: &Persistence,
    year: &str,
    id: &str,
) -> Result<ProjectPdf, ApiError> {
    let year: i32 = resolve_query_year(Some(year))
        .map_err(|_| ApiError::invalid_input("year", INVALID_REQUEST))?;
    if id.trim().is_empty() {
        return Err(ApiError::invalid_input("id", INVALID_REQUEST));
    }

    persistence
        .get_project_pdf(year, id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::not_found("ProjectPdf", format!("{year}/{id}")))
}
