// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Request bodies are lenient the way the admin UI sends them: every field
//! is optional and strings default to empty. Required fields and value
//! ranges are checked by the handlers, not by deserialization.

use ingenium_domain::{
    Article, ArticleImage, Author, EditorialContent, GalleryItem, HomeData, JsonObject,
    Photographer, Project, Quote, SectionSetting, TeamMember, YearRecord, parse_year,
    validate_year,
};

use crate::auth::AuthenticatedAdmin;
use crate::error::{ApiError, translate_domain_error};

/// A year as sent in a JSON body: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    /// `2026`
    Number(i64),
    /// `"2026"`
    Text(String),
}

impl From<i32> for YearValue {
    fn from(year: i32) -> Self {
        Self::Number(i64::from(year))
    }
}

/// Validates an optional body year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year is missing, not an integer,
/// or outside the supported range.
pub fn resolve_year(value: Option<&YearValue>) -> Result<i32, ApiError> {
    let result = match value {
        Some(YearValue::Number(year)) => validate_year(*year),
        Some(YearValue::Text(raw)) => parse_year(raw),
        None => parse_year(""),
    };
    result.map_err(translate_domain_error)
}

/// Validates an optional query or path year.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the year is missing or invalid.
pub fn resolve_query_year(value: Option<&str>) -> Result<i32, ApiError> {
    parse_year(value.unwrap_or_default()).map_err(translate_domain_error)
}

// ============================================================================
// Generic responses
// ============================================================================

/// Response carrying only the success flag.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    #[must_use]
    pub const fn success() -> Self {
        Self { ok: true }
    }
}

/// A failure body.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}

/// A list of year-scoped items.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemsResponse<T> {
    pub ok: bool,
    pub items: Vec<T>,
}

/// A single year-scoped item.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemResponse<T> {
    pub ok: bool,
    pub item: T,
}

// ============================================================================
// Authentication
// ============================================================================

/// Login body.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login and whoami response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminResponse {
    pub ok: bool,
    pub user: AuthenticatedAdmin,
}

// ============================================================================
// Years
// ============================================================================

/// Query carrying a year.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct YearQuery {
    pub year: Option<String>,
}

/// Every year plus the current one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearsResponse {
    pub ok: bool,
    pub years: Vec<YearRecord>,
    pub current_year: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SetCurrentYearRequest {
    pub year: Option<YearValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SetCurrentYearResponse {
    pub ok: bool,
    pub year: i32,
}

/// Result of the archive transition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub ok: bool,
    pub archived_year: i32,
    pub new_current_year: i32,
}

/// A year's aggregated articles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct YearDataResponse {
    pub ok: bool,
    pub year: i32,
    pub data: HomeData,
}

/// The current year's aggregated articles.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentYearDataResponse {
    pub ok: bool,
    pub current_year: i32,
    pub data: HomeData,
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionSettingsResponse {
    pub ok: bool,
    pub settings: Vec<SectionSetting>,
}

/// Visible sections of a year, in navigation order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NavigationResponse {
    pub ok: bool,
    pub year: i32,
    pub sections: Vec<SectionSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertSectionSettingRequest {
    pub year: Option<YearValue>,
    pub section_key: String,
    pub display_name: String,
    pub is_hidden: bool,
}

// ============================================================================
// Articles
// ============================================================================

/// Query for the admin article list.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArticleListQuery {
    pub year: Option<String>,
    pub section: Option<String>,
}

/// Query carrying an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArticlesResponse {
    pub ok: bool,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArticleResponse {
    pub ok: bool,
    pub article: Article,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertArticleRequest {
    pub id: String,
    pub year: Option<YearValue>,
    pub section: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub read_time: String,
    pub author: Author,
    pub paragraphs: Vec<String>,
    pub images: Vec<ArticleImage>,
}

// ============================================================================
// Gallery
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertGalleryItemRequest {
    pub id: String,
    pub year: Option<YearValue>,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub image_id: String,
    pub photographer: Photographer,
    pub rank: String,
    pub folder_context: String,
}

/// Gallery list response.
pub type GalleryItemsResponse = ItemsResponse<GalleryItem>;

// ============================================================================
// Projects
// ============================================================================

/// An uploaded PDF as sent by the admin UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadedPdfRequest {
    /// `data:application/pdf;base64,...`
    pub data_url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertProjectRequest {
    pub id: String,
    pub year: Option<YearValue>,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub team_name: String,
    pub pdf_link: String,
    pub problem_statement: JsonObject,
    pub files: JsonObject,
    pub tech_stack: Vec<String>,
    pub created_at: String,
    pub uploaded_pdf: Option<UploadedPdfRequest>,
}

/// Project list response.
pub type ProjectsResponse = ItemsResponse<Project>;

// ============================================================================
// Editorial
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditorialResponse {
    pub ok: bool,
    pub editorial: EditorialContent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UpsertEditorialRequest {
    pub title: String,
    pub author: Author,
    pub date: String,
    pub content: Vec<String>,
    pub quote: Quote,
}

// ============================================================================
// Team
// ============================================================================

/// Query for deleting a team member.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TeamMemberQuery {
    pub year: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertTeamMemberRequest {
    pub year: Option<YearValue>,
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub year_label: String,
    pub image_id: String,
    pub linkedin: String,
    pub github: String,
}

/// Team list response.
pub type TeamMembersResponse = ItemsResponse<TeamMember>;
