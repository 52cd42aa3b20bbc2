// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Maximum number of team members a single year may hold.
pub const MAX_TEAM_MEMBERS_PER_YEAR: i64 = 10;

/// A member of a year's editorial team, keyed by `(year, id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub year: i32,
    pub id: String,
    pub name: String,
    pub role: String,
    pub department: String,
    /// Free-text study year, e.g. "3rd Year".
    pub year_label: String,
    pub image_id: String,
    pub linkedin: String,
    pub github: String,
}
