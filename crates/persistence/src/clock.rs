// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamps written to audit columns.
//!
//! All `created_at`/`updated_at`/`archived_at` values are fixed-width UTC
//! text so that ordering by the column is chronological on every backend.

use time::OffsetDateTime;
use time::macros::format_description;

/// Returns the current UTC time as `YYYY-MM-DDTHH:MM:SS.ffffffZ`.
pub fn timestamp_now() -> String {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    now.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:6]Z"
    ))
    .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Returns the current unix time in seconds.
pub fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
