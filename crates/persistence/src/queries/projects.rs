// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project and project PDF queries.

use std::collections::HashSet;

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{JsonObject, Project, ProjectPdf, ProjectTeam};
use tracing::debug;

use crate::diesel_schema::{cms_project_pdfs, cms_projects};
use crate::error::PersistenceError;

/// Diesel Queryable struct for project rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_projects)]
struct ProjectRow {
    id: String,
    year: i32,
    title: String,
    excerpt: String,
    category: String,
    team_name: String,
    pdf_link: String,
    problem_statement: String,
    files: String,
    tech_stack: String,
    created_at_text: String,
}

impl ProjectRow {
    fn into_project(self, has_uploaded_pdf: bool) -> Result<Project, PersistenceError> {
        let problem_statement: JsonObject = serde_json::from_str(&self.problem_statement)?;
        let files: JsonObject = serde_json::from_str(&self.files)?;
        let tech_stack: Vec<String> = serde_json::from_str(&self.tech_stack)?;

        Ok(Project {
            id: self.id,
            year: self.year,
            title: self.title,
            excerpt: self.excerpt,
            category: self.category,
            team: ProjectTeam {
                name: self.team_name,
            },
            pdf_link: self.pdf_link,
            problem_statement: (!problem_statement.is_empty()).then_some(problem_statement),
            files,
            tech_stack,
            created_at: self.created_at_text,
            has_uploaded_pdf,
        })
    }
}

backend_fn! {
/// Lists the projects of a year, most recently updated first.
///
/// # Errors
///
/// Returns an error if a query fails or a row cannot be decoded.
pub fn list_projects(conn: &mut _, year: i32) -> Result<Vec<Project>, PersistenceError> {
    let rows: Vec<ProjectRow> = cms_projects::table
        .filter(cms_projects::year.eq(year))
        .order((cms_projects::updated_at.desc(), cms_projects::id.asc()))
        .select(ProjectRow::as_select())
        .load(conn)?;

    let ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
    let with_pdf: HashSet<String> = if ids.is_empty() {
        HashSet::new()
    } else {
        cms_project_pdfs::table
            .filter(cms_project_pdfs::project_id.eq_any(ids))
            .select(cms_project_pdfs::project_id)
            .load::<String>(conn)?
            .into_iter()
            .collect()
    };

    debug!(year, count = rows.len(), with_pdf = with_pdf.len(), "Listed projects");
    rows.into_iter()
        .map(|row| {
            let has_pdf: bool = with_pdf.contains(&row.id);
            row.into_project(has_pdf)
        })
        .collect()
}
}

backend_fn! {
/// Retrieves one project by `(year, id)`.
///
/// # Errors
///
/// Returns an error if a query fails or the row cannot be decoded.
/// Returns `Ok(None)` if no such project exists.
pub fn get_project(conn: &mut _, year: i32, id: &str) -> Result<Option<Project>, PersistenceError> {
    let result: Result<ProjectRow, diesel::result::Error> = cms_projects::table
        .filter(cms_projects::year.eq(year))
        .filter(cms_projects::id.eq(id))
        .select(ProjectRow::as_select())
        .first(conn);

    let row: ProjectRow = match result {
        Ok(row) => row,
        Err(diesel::result::Error::NotFound) => return Ok(None),
        Err(e) => return Err(PersistenceError::from(e)),
    };

    let has_pdf: bool = diesel::select(diesel::dsl::exists(
        cms_project_pdfs::table.filter(cms_project_pdfs::project_id.eq(id)),
    ))
    .get_result(conn)?;

    row.into_project(has_pdf).map(Some)
}
}

backend_fn! {
/// Retrieves the stored PDF of the project `(year, id)`.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if the project or its PDF does not exist.
pub fn get_project_pdf(
    conn: &mut _,
    year: i32,
    id: &str,
) -> Result<Option<ProjectPdf>, PersistenceError> {
    debug!(year, id, "Looking up project PDF");

    let row: Option<(String, String, Vec<u8>)> = cms_project_pdfs::table
        .inner_join(cms_projects::table)
        .filter(cms_projects::year.eq(year))
        .filter(cms_projects::id.eq(id))
        .select((
            cms_project_pdfs::file_name,
            cms_project_pdfs::mime_type,
            cms_project_pdfs::file_bytes,
        ))
        .first(conn)
        .optional()?;

    Ok(row.map(|(file_name, mime_type, bytes)| ProjectPdf {
        file_name,
        mime_type,
        bytes,
    }))
}
}
