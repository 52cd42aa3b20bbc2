// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gallery queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::{GalleryItem, GalleryKind, Photographer};
use tracing::debug;

use crate::diesel_schema::cms_gallery_items;
use crate::error::PersistenceError;

/// Diesel Queryable struct for gallery rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = cms_gallery_items)]
struct GalleryItemRow {
    id: String,
    year: i32,
    kind: String,
    title: String,
    description: String,
    image_id: String,
    photographer_name: String,
    photographer_dept: String,
    photographer_year: String,
    rank: String,
    folder_context: String,
}

impl GalleryItemRow {
    fn into_item(self) -> Result<GalleryItem, PersistenceError> {
        let kind: GalleryKind = self
            .kind
            .parse()
            .map_err(|e: ingenium_domain::DomainError| {
                PersistenceError::SerializationError(e.to_string())
            })?;
        Ok(GalleryItem {
            id: self.id,
            year: self.year,
            kind,
            title: self.title,
            description: self.description,
            image_id: self.image_id,
            photographer: Photographer {
                name: self.photographer_name,
                dept: self.photographer_dept,
                year: self.photographer_year,
            },
            rank: self.rank,
            folder_context: self.folder_context,
        })
    }
}

backend_fn! {
/// Lists the gallery items of a year, most recently updated first.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be decoded.
pub fn list_gallery_items(conn: &mut _, year: i32) -> Result<Vec<GalleryItem>, PersistenceError> {
    let rows: Vec<GalleryItemRow> = cms_gallery_items::table
        .filter(cms_gallery_items::year.eq(year))
        .order((cms_gallery_items::updated_at.desc(), cms_gallery_items::id.asc()))
        .select(GalleryItemRow::as_select())
        .load(conn)?;

    debug!(year, count = rows.len(), "Listed gallery items");
    rows.into_iter().map(GalleryItemRow::into_item).collect()
}
}

backend_fn! {
/// Retrieves one gallery item by `(year, id)`.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be decoded.
/// Returns `Ok(None)` if no such item exists.
pub fn get_gallery_item(
    conn: &mut _,
    year: i32,
    id: &str,
) -> Result<Option<GalleryItem>, PersistenceError> {
    let result: Result<GalleryItemRow, diesel::result::Error> = cms_gallery_items::table
        .filter(cms_gallery_items::year.eq(year))
        .filter(cms_gallery_items::id.eq(id))
        .select(GalleryItemRow::as_select())
        .first(conn);

    match result {
        Ok(row) => row.into_item().map(Some),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
