// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session cookie handling and authentication for the server.
//!
//! The session token travels in an `HttpOnly` cookie. This module reads it
//! from requests, validates it through the API layer, and builds the
//! `Set-Cookie` values for login and logout.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, header, request::Parts},
};
use ingenium_api::{AuthenticatedAdmin, authenticate};
use ingenium_persistence::Persistence;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::{debug, error};

use crate::{AppState, HttpError, run_blocking};

/// Name of the admin session cookie.
pub const SESSION_COOKIE_NAME: &str = "ingenium_admin_session";

/// `Expires` attribute format, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
const IMF_FIXDATE: &[FormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Returns the session token carried by the request's cookies, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Builds the `Set-Cookie` value for a new session.
pub fn session_cookie(
    token: &str,
    expires_at: OffsetDateTime,
    secure: bool,
) -> Result<HeaderValue, HttpError> {
    let expires: String = expires_at
        .to_offset(UtcOffset::UTC)
        .format(IMF_FIXDATE)
        .map_err(|e| {
            error!(error = %e, "Failed to format cookie expiry");
            HttpError::internal()
        })?;
    let mut cookie: String = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Expires={expires}"
    );
    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).map_err(|e| {
        error!(error = %e, "Session cookie is not a valid header value");
        HttpError::internal()
    })
}

/// Builds the `Set-Cookie` value that clears the session.
pub fn cleared_session_cookie(secure: bool) -> Result<HeaderValue, HttpError> {
    let mut cookie: String =
        format!("{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie).map_err(|e| {
        error!(error = %e, "Cleared session cookie is not a valid header value");
        HttpError::internal()
    })
}

/// Extractor for the authenticated admin.
///
/// Validates the session cookie before the handler runs, so a request
/// without a valid session never reaches a write.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     AdminSession(admin): AdminSession,
/// ) -> Result<Json<Response>, HttpError> {
///     // admin: AuthenticatedAdmin
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 `{"ok": false, "error": "Unauthorized"}` if the
/// cookie is missing, or the session is unknown or expired.
pub struct AdminSession(pub AuthenticatedAdmin);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: Option<String> = session_token(&parts.headers);
        let persistence: Persistence = state.persistence.clone();

        let admin: AuthenticatedAdmin =
            run_blocking(move || authenticate(&persistence, token.as_deref())).await?;

        debug!(admin_id = admin.id, "Session validated");
        Ok(Self(admin))
    }
}
