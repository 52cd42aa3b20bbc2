// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Project and project PDF mutations.
//!
//! A project row and its PDF blob always change together in one write
//! transaction. With an upload the blob is replaced and the project link
//! points at the internal retrieval path; without one, a link that no
//! longer points there drops the stored blob.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{ProjectInput, internal_pdf_path};
use num_traits::ToPrimitive;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::{cms_project_pdfs, cms_projects};
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or fully overwrites a project keyed by its id, together with
/// its PDF blob.
///
/// The upload (if any) is already decoded; nothing here can fail on the
/// payload itself. The target year must already exist.
///
/// # Errors
///
/// Returns an error if serialization or any write fails; nothing is
/// committed in that case.
pub fn upsert_project(conn: &mut _, input: &ProjectInput) -> Result<(), PersistenceError> {
    let problem_statement_json: String = serde_json::to_string(&input.problem_statement)?;
    let files_json: String = serde_json::to_string(&input.files)?;
    let tech_stack_json: String = serde_json::to_string(&input.tech_stack)?;
    let pdf_link: String = input.effective_pdf_link();
    let internal_path: String = internal_pdf_path(input.year, &input.id);
    let now: String = timestamp_now();

    let blob_dropped: bool = conn.write_transaction(|conn| {
        let existing: bool = diesel::select(exists(
            cms_projects::table.filter(cms_projects::id.eq(&input.id)),
        ))
        .get_result(conn)?;

        if existing {
            diesel::update(cms_projects::table.filter(cms_projects::id.eq(&input.id)))
                .set((
                    cms_projects::year.eq(input.year),
                    cms_projects::title.eq(&input.title),
                    cms_projects::excerpt.eq(&input.excerpt),
                    cms_projects::category.eq(&input.category),
                    cms_projects::team_name.eq(&input.team.name),
                    cms_projects::pdf_link.eq(&pdf_link),
                    cms_projects::problem_statement.eq(&problem_statement_json),
                    cms_projects::files.eq(&files_json),
                    cms_projects::tech_stack.eq(&tech_stack_json),
                    cms_projects::created_at_text.eq(&input.created_at),
                    cms_projects::updated_at.eq(&now),
                ))
                .execute(conn)?;
        } else {
            diesel::insert_into(cms_projects::table)
                .values((
                    cms_projects::id.eq(&input.id),
                    cms_projects::year.eq(input.year),
                    cms_projects::title.eq(&input.title),
                    cms_projects::excerpt.eq(&input.excerpt),
                    cms_projects::category.eq(&input.category),
                    cms_projects::team_name.eq(&input.team.name),
                    cms_projects::pdf_link.eq(&pdf_link),
                    cms_projects::problem_statement.eq(&problem_statement_json),
                    cms_projects::files.eq(&files_json),
                    cms_projects::tech_stack.eq(&tech_stack_json),
                    cms_projects::created_at_text.eq(&input.created_at),
                    cms_projects::created_at.eq(&now),
                    cms_projects::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        if let Some(upload) = &input.uploaded_pdf {
            let file_size: i64 = upload.bytes.len().to_i64().ok_or_else(|| {
                PersistenceError::OutOfRange("PDF size".to_string())
            })?;

            let blob_exists: bool = diesel::select(exists(
                cms_project_pdfs::table.filter(cms_project_pdfs::project_id.eq(&input.id)),
            ))
            .get_result(conn)?;

            if blob_exists {
                diesel::update(
                    cms_project_pdfs::table.filter(cms_project_pdfs::project_id.eq(&input.id)),
                )
                .set((
                    cms_project_pdfs::file_name.eq(&upload.file_name),
                    cms_project_pdfs::mime_type.eq(&upload.mime_type),
                    cms_project_pdfs::file_bytes.eq(upload.bytes.as_slice()),
                    cms_project_pdfs::file_size.eq(file_size),
                    cms_project_pdfs::updated_at.eq(&now),
                ))
                .execute(conn)?;
            } else {
                diesel::insert_into(cms_project_pdfs::table)
                    .values((
                        cms_project_pdfs::project_id.eq(&input.id),
                        cms_project_pdfs::file_name.eq(&upload.file_name),
                        cms_project_pdfs::mime_type.eq(&upload.mime_type),
                        cms_project_pdfs::file_bytes.eq(upload.bytes.as_slice()),
                        cms_project_pdfs::file_size.eq(file_size),
                        cms_project_pdfs::created_at.eq(&now),
                        cms_project_pdfs::updated_at.eq(&now),
                    ))
                    .execute(conn)?;
            }
            return Ok(false);
        }

        if pdf_link.starts_with(&internal_path) {
            return Ok(false);
        }

        let deleted: usize = diesel::delete(
            cms_project_pdfs::table.filter(cms_project_pdfs::project_id.eq(&input.id)),
        )
        .execute(conn)?;
        Ok(deleted > 0)
    })?;

    info!(
        id = %input.id,
        year = input.year,
        uploaded_pdf = input.uploaded_pdf.is_some(),
        blob_dropped,
        "Saved project"
    );
    Ok(())
}
}

backend_fn! {
/// Deletes a project (and, by cascade, its PDF). Deleting a missing id is
/// not an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_project(conn: &mut _, id: &str) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(cms_projects::table.filter(cms_projects::id.eq(id))).execute(conn)?;

    info!(id, deleted, "Deleted project");
    Ok(())
}
}
