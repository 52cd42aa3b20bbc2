// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication types and services.
//!
//! Admins authenticate with email and password and receive an opaque
//! session token. Only the SHA-256 digest of the token is stored; the raw
//! token travels in the session cookie and nowhere else.

use ingenium_persistence::{
    AdminIdentity, AdminUserData, Persistence, generate_session_token, verify_password,
};
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use crate::error::AuthError;

/// The admin behind a validated session.
///
/// Handlers that mutate content take this as a parameter, so a write
/// cannot be reached without first validating a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthenticatedAdmin {
    /// The admin user's id.
    pub id: i64,
    /// The admin user's normalized email.
    pub email: String,
}

impl From<AdminIdentity> for AuthenticatedAdmin {
    fn from(identity: AdminIdentity) -> Self {
        Self {
            id: identity.id,
            email: identity.email,
        }
    }
}

/// Admin identity supplied through configuration.
///
/// On login, if no user with this email exists yet, one is created with
/// this password. This is the only way admin accounts come into being.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminBootstrap {
    email: String,
    password: String,
}

impl AdminBootstrap {
    /// Builds a bootstrap identity, or `None` unless both values are
    /// non-blank.
    #[must_use]
    pub fn from_config(email: Option<&str>, password: Option<&str>) -> Option<Self> {
        let email: String = normalize_email(email?);
        let password: &str = password?;
        if email.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            email,
            password: password.to_string(),
        })
    }

    /// The normalized bootstrap email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Debug for AdminBootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminBootstrap")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A session issued by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// The raw session token for the cookie.
    pub token: String,
    /// The authenticated admin.
    pub admin: AuthenticatedAdmin,
    /// When the session stops being valid.
    pub expires_at: OffsetDateTime,
}

/// Normalizes an email for lookup and storage.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Authentication service for admin login and session management.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Session lifetime.
    pub const SESSION_TTL: Duration = Duration::days(7);

    /// Authenticates an admin and issues a session.
    ///
    /// Creates the configured bootstrap admin first when it does not exist.
    /// Expired sessions are purged on success; a failed purge is logged and
    /// ignored.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `bootstrap` - The configured admin identity, if any
    /// * `email` - The email presented at login
    /// * `password` - The password presented at login
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` for an unknown email or a
    /// wrong password, and `AuthError::Storage` if the database fails.
    pub fn login(
        persistence: &Persistence,
        bootstrap: Option<&AdminBootstrap>,
        email: &str,
        password: &str,
    ) -> Result<IssuedSession, AuthError> {
        if let Some(bootstrap) = bootstrap {
            persistence
                .ensure_admin_user(&bootstrap.email, &bootstrap.password)
                .map_err(AuthError::Storage)?;
        }

        let email: String = normalize_email(email);
        let user: AdminUserData = persistence
            .find_admin_by_email(&email)
            .map_err(AuthError::Storage)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown email"),
            })?;

        if !verify_password(password, &user.password_hash) {
            warn!(user_id = user.id, "Rejected login with wrong password");
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Wrong password"),
            });
        }

        let token: String = generate_session_token();
        let expires_at: OffsetDateTime = OffsetDateTime::now_utc() + Self::SESSION_TTL;
        persistence
            .create_session(&token, user.id, expires_at.unix_timestamp())
            .map_err(AuthError::Storage)?;

        match persistence.delete_expired_sessions() {
            Ok(purged) if purged > 0 => info!(purged, "Purged expired sessions"),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Failed to purge expired sessions"),
        }

        info!(user_id = user.id, "Admin logged in");
        Ok(IssuedSession {
            token,
            admin: AuthenticatedAdmin {
                id: user.id,
                email: user.email,
            },
            expires_at,
        })
    }

    /// Validates a session token and returns the authenticated admin.
    ///
    /// A missing, unknown, or expired token is uniformly `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` if the session is not valid, and
    /// `AuthError::Storage` if the database fails.
    pub fn validate_session(
        persistence: &Persistence,
        session_token: Option<&str>,
    ) -> Result<AuthenticatedAdmin, AuthError> {
        let Some(token) = session_token.filter(|token| !token.is_empty()) else {
            return Err(AuthError::Unauthorized);
        };

        persistence
            .find_session_admin(token)
            .map_err(AuthError::Storage)?
            .map(AuthenticatedAdmin::from)
            .ok_or_else(|| {
                warn!("Rejected invalid or expired session");
                AuthError::Unauthorized
            })
    }

    /// Logs out by deleting the session, if any. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the delete fails.
    pub fn logout(persistence: &Persistence, session_token: Option<&str>) -> Result<(), AuthError> {
        if let Some(token) = session_token.filter(|token| !token.is_empty()) {
            persistence.delete_session(token).map_err(AuthError::Storage)?;
            info!("Admin logged out");
        }
        Ok(())
    }
}
