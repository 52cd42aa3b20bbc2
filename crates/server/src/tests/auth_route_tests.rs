// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::http::{StatusCode, header};
use serde_json::json;

use super::{TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, create_test_app, create_test_app_with};

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = create_test_app();

    let response = app
        .send_json(
            "POST",
            "/api/admin/auth/login",
            None,
            &json!({ "email": TEST_ADMIN_EMAIL, "password": TEST_ADMIN_PASSWORD }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["user"]["email"], json!(TEST_ADMIN_EMAIL));

    let cookie: String = response.header(header::SET_COOKIE);
    assert!(cookie.starts_with("ingenium_admin_session="));
    assert!(cookie.contains("; Path=/"));
    assert!(cookie.contains("; HttpOnly"));
    assert!(cookie.contains("; SameSite=Lax"));
    assert!(cookie.contains("; Expires="));
    assert!(cookie.ends_with(" GMT"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_cookie_is_secure_when_configured() {
    let app = create_test_app_with(true);

    let response = app
        .send_json(
            "POST",
            "/api/admin/auth/login",
            None,
            &json!({ "email": TEST_ADMIN_EMAIL, "password": TEST_ADMIN_PASSWORD }),
        )
        .await;

    assert!(response.header(header::SET_COOKIE).ends_with("; Secure"));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let app = create_test_app();

    let response = app
        .send_json(
            "POST",
            "/api/admin/auth/login",
            None,
            &json!({ "email": TEST_ADMIN_EMAIL, "password": "nope" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json(),
        json!({ "ok": false, "error": "Invalid credentials." })
    );
    assert!(response.headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_without_credentials_is_bad_request() {
    let app = create_test_app();

    let response = app
        .send_json("POST", "/api/admin/auth/login", None, &json!({}))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json()["error"],
        json!("Email and password are required.")
    );
}

#[tokio::test]
async fn test_me_requires_session() {
    let app = create_test_app();

    let response = app.get("/api/admin/auth/me", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json(),
        json!({ "ok": false, "error": "Unauthorized" })
    );
}

#[tokio::test]
async fn test_me_returns_logged_in_admin() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let response = app.get("/api/admin/auth/me", Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["user"]["email"], json!(TEST_ADMIN_EMAIL));
}

#[tokio::test]
async fn test_me_accepts_cookie_among_others() {
    let app = create_test_app();
    let cookie: String = app.login().await;
    let combined: String = format!("theme=dark; {cookie}; lang=en");

    let response = app.get("/api/admin/auth/me", Some(&combined)).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_clears_cookie_and_session() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let response = app
        .send_json("POST", "/api/admin/auth/logout", Some(&cookie), &json!({}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "ok": true }));
    let cleared: String = response.header(header::SET_COOKIE);
    assert!(cleared.starts_with("ingenium_admin_session=;"));
    assert!(cleared.contains("Max-Age=0"));

    let after = app.get("/api/admin/auth/me", Some(&cookie)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_succeeds() {
    let app = create_test_app();

    let response = app
        .send_json("POST", "/api/admin/auth/logout", None, &json!({}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get(header::SET_COOKIE).is_some());
}
