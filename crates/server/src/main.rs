// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod admin;
mod public;
mod session;

#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use ingenium_api::{
    AdminBootstrap, ApiError, ErrorResponse, PageInvalidator, TracingInvalidator,
};
use ingenium_persistence::Persistence;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Largest accepted request body. Project PDFs arrive base64-encoded in JSON.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Ingenium Server - HTTP server for the Ingenium magazine CMS
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database to use: a `mysql://` URL, a `SQLite` file path, or `:memory:`.
    /// If not provided, uses an in-memory database.
    #[arg(short, long, env = "DATABASE_URL")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "INGENIUM_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Email of the admin account created on first login
    #[arg(long, env = "ADMIN_EMAIL")]
    admin_email: Option<String>,

    /// Password of the admin account created on first login
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// Mark the session cookie `Secure`
    #[arg(long, env = "INGENIUM_SECURE_COOKIES")]
    secure_cookies: bool,
}

/// Application state shared across handlers.
///
/// `Persistence` is a handle over a connection pool, so cloning the state
/// is cheap and every request checks out its own connection.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Persistence,
    /// Receives the public pages made stale by each write.
    invalidator: Arc<dyn PageInvalidator>,
    /// The configured admin identity, if any.
    bootstrap: Option<AdminBootstrap>,
    /// Whether the session cookie carries `Secure`.
    secure_cookies: bool,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Internal server error"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse::new(self.message));
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed | ApiError::Unauthorized => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } | ApiError::CapacityExceeded { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: String::from("Not found"),
            },
            ApiError::InvariantViolation { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self::internal()
            }
        }
    }
}

/// Unwraps a JSON body, answering malformed bodies with a 400.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(error = %rejection, "Rejected request body");
        HttpError {
            status: StatusCode::BAD_REQUEST,
            message: String::from("Invalid JSON body"),
        }
    })
}

/// Runs a blocking API call on the blocking thread pool.
async fn run_blocking<T, F>(call: F) -> Result<T, HttpError>
where
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| {
            error!(error = %e, "Blocking task failed");
            HttpError::internal()
        })?
        .map_err(HttpError::from)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        // Admin authentication
        .route("/api/admin/auth/login", post(admin::handle_login))
        .route("/api/admin/auth/logout", post(admin::handle_logout))
        .route("/api/admin/auth/me", get(admin::handle_whoami))
        // Admin years
        .route("/api/admin/years", get(admin::handle_list_years))
        .route("/api/admin/years/current", post(admin::handle_set_current_year))
        .route("/api/admin/archive", post(admin::handle_archive))
        // Admin content
        .route(
            "/api/admin/sections",
            get(admin::handle_get_section_settings).post(admin::handle_upsert_section_setting),
        )
        .route(
            "/api/admin/articles",
            get(admin::handle_list_articles)
                .post(admin::handle_upsert_article)
                .delete(admin::handle_delete_article),
        )
        .route("/api/admin/blog", post(admin::handle_upsert_article))
        .route(
            "/api/admin/gallery",
            get(admin::handle_list_gallery_items)
                .post(admin::handle_upsert_gallery_item)
                .delete(admin::handle_delete_gallery_item),
        )
        .route(
            "/api/admin/projects",
            get(admin::handle_list_projects)
                .post(admin::handle_upsert_project)
                .delete(admin::handle_delete_project),
        )
        .route(
            "/api/admin/editorial",
            get(admin::handle_get_editorial).post(admin::handle_upsert_editorial),
        )
        .route(
            "/api/admin/team",
            get(admin::handle_list_team_members)
                .post(admin::handle_upsert_team_member)
                .delete(admin::handle_delete_team_member),
        )
        // Public reads
        .route("/api/projects/{year}/{id}/pdf", get(public::handle_project_pdf))
        .route("/api/public/years", get(public::handle_public_years))
        .route("/api/public/current", get(public::handle_current_year_data))
        .route("/api/public/years/{year}", get(public::handle_year_data))
        .route(
            "/api/public/years/{year}/sections",
            get(public::handle_navigation),
        )
        .route(
            "/api/public/years/{year}/sections/{section}/articles",
            get(public::handle_section_articles),
        )
        .route(
            "/api/public/years/{year}/sections/{section}/articles/{id}",
            get(public::handle_article),
        )
        .route("/api/public/years/{year}/gallery", get(public::handle_gallery))
        .route(
            "/api/public/years/{year}/gallery/{id}",
            get(public::handle_gallery_item),
        )
        .route("/api/public/years/{year}/projects", get(public::handle_projects))
        .route(
            "/api/public/years/{year}/projects/{id}",
            get(public::handle_project),
        )
        .route("/api/public/years/{year}/team", get(public::handle_team))
        .route(
            "/api/public/years/{year}/team/{id}",
            get(public::handle_team_member),
        )
        .route("/api/public/editorial", get(public::handle_editorial))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Ingenium Server");

    let persistence: Persistence = if let Some(database) = &args.database {
        Persistence::connect(database)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    persistence.ensure_schema()?;

    let bootstrap: Option<AdminBootstrap> =
        AdminBootstrap::from_config(args.admin_email.as_deref(), args.admin_password.as_deref());
    match &bootstrap {
        Some(bootstrap) => info!(email = %bootstrap.email(), "Admin bootstrap configured"),
        None => warn!("No admin bootstrap configured; only existing admins can log in"),
    }

    let app_state: AppState = AppState {
        persistence,
        invalidator: Arc::new(TracingInvalidator),
        bootstrap,
        secure_cookies: args.secure_cookies,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
