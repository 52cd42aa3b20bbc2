// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod admin_route_tests;
mod auth_route_tests;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use ingenium_api::{AdminBootstrap, RecordingInvalidator};
use ingenium_persistence::Persistence;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::{AppState, build_router};

pub const TEST_ADMIN_EMAIL: &str = "editor@ingenium.test";
pub const TEST_ADMIN_PASSWORD: &str = "s3cret-pass";

/// A router over fresh in-memory state whose current year is 2025.
pub struct TestApp {
    pub router: Router,
    pub persistence: Persistence,
    pub invalidator: Arc<RecordingInvalidator>,
}

/// A decoded response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body should be JSON")
    }

    pub fn header(&self, name: header::HeaderName) -> String {
        self.headers
            .get(name)
            .expect("Header should be present")
            .to_str()
            .unwrap()
            .to_string()
    }
}

pub fn create_test_app_with(secure_cookies: bool) -> TestApp {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    persistence
        .set_current_year(2025)
        .expect("Failed to set current year");
    let invalidator: Arc<RecordingInvalidator> = Arc::new(RecordingInvalidator::new());
    let app_state: AppState = AppState {
        persistence: persistence.clone(),
        invalidator: invalidator.clone(),
        bootstrap: AdminBootstrap::from_config(Some(TEST_ADMIN_EMAIL), Some(TEST_ADMIN_PASSWORD)),
        secure_cookies,
    };

    TestApp {
        router: build_router(app_state),
        persistence,
        invalidator,
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(false)
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status: StatusCode = response.status();
        let headers: HeaderMap = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        cookie: Option<&str>,
        body: &Value,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method("DELETE").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Logs in as the bootstrap admin and returns the `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .send_json(
                "POST",
                "/api/admin/auth/login",
                None,
                &serde_json::json!({
                    "email": TEST_ADMIN_EMAIL,
                    "password": TEST_ADMIN_PASSWORD,
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let set_cookie: String = response.header(header::SET_COOKIE);
        set_cookie
            .split(';')
            .next()
            .expect("Set-Cookie should carry a name=value pair")
            .to_string()
    }
}
