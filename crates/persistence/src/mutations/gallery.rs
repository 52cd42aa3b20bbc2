// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gallery item mutations.

use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use ingenium_domain::GalleryItem;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::clock::timestamp_now;
use crate::diesel_schema::cms_gallery_items;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or fully overwrites a gallery item keyed by its id.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_gallery_item(conn: &mut _, item: &GalleryItem) -> Result<(), PersistenceError> {
    let now: String = timestamp_now();

    conn.write_transaction(|conn| {
        let existing: bool = diesel::select(exists(
            cms_gallery_items::table.filter(cms_gallery_items::id.eq(&item.id)),
        ))
        .get_result(conn)?;

        if existing {
            diesel::update(cms_gallery_items::table.filter(cms_gallery_items::id.eq(&item.id)))
                .set((
                    cms_gallery_items::year.eq(item.year),
                    cms_gallery_items::kind.eq(item.kind.as_str()),
                    cms_gallery_items::title.eq(&item.title),
                    cms_gallery_items::description.eq(&item.description),
                    cms_gallery_items::image_id.eq(&item.image_id),
                    cms_gallery_items::photographer_name.eq(&item.photographer.name),
                    cms_gallery_items::photographer_dept.eq(&item.photographer.dept),
                    cms_gallery_items::photographer_year.eq(&item.photographer.year),
                    cms_gallery_items::rank.eq(&item.rank),
                    cms_gallery_items::folder_context.eq(&item.folder_context),
                    cms_gallery_items::updated_at.eq(&now),
                ))
                .execute(conn)?;
        } else {
            diesel::insert_into(cms_gallery_items::table)
                .values((
                    cms_gallery_items::id.eq(&item.id),
                    cms_gallery_items::year.eq(item.year),
                    cms_gallery_items::kind.eq(item.kind.as_str()),
                    cms_gallery_items::title.eq(&item.title),
                    cms_gallery_items::description.eq(&item.description),
                    cms_gallery_items::image_id.eq(&item.image_id),
                    cms_gallery_items::photographer_name.eq(&item.photographer.name),
                    cms_gallery_items::photographer_dept.eq(&item.photographer.dept),
                    cms_gallery_items::photographer_year.eq(&item.photographer.year),
                    cms_gallery_items::rank.eq(&item.rank),
                    cms_gallery_items::folder_context.eq(&item.folder_context),
                    cms_gallery_items::created_at.eq(&now),
                    cms_gallery_items::updated_at.eq(&now),
                ))
                .execute(conn)?;
        }

        Ok(())
    })?;

    info!(id = %item.id, year = item.year, kind = item.kind.as_str(), "Saved gallery item");
    Ok(())
}
}

backend_fn! {
/// Deletes a gallery item by id. Deleting a missing id is not an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_gallery_item(conn: &mut _, id: &str) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(cms_gallery_items::table.filter(cms_gallery_items::id.eq(id)))
            .execute(conn)?;

    info!(id, deleted, "Deleted gallery item");
    Ok(())
}
}
