// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Stored admin account, including the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUserData {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// The authenticated admin behind a valid session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub id: i64,
    pub email: String,
}

