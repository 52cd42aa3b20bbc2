// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use ingenium_domain::ArticleSection;
use serde_json::{Value, json};

use super::create_test_app;

fn article_body(id: &str, year: Value, section: &str) -> Value {
    json!({
        "id": id,
        "year": year,
        "section": section,
        "title": format!("Article {id}"),
        "author": { "name": "Ira", "role": "Editor" },
        "paragraphs": ["First."]
    })
}

#[tokio::test]
async fn test_writes_without_session_are_rejected_before_touching_storage() {
    let app = create_test_app();

    let responses = vec![
        app.send_json(
            "POST",
            "/api/admin/articles",
            None,
            &article_body("a1", json!(2025), "utkarshi"),
        )
        .await,
        app.send_json("POST", "/api/admin/archive", None, &json!({}))
            .await,
        app.send_json(
            "POST",
            "/api/admin/years/current",
            None,
            &json!({ "year": 2030 }),
        )
        .await,
        app.delete("/api/admin/articles?id=a1", None).await,
        app.send_json(
            "POST",
            "/api/admin/articles",
            Some("ingenium_admin_session=forged"),
            &article_body("a1", json!(2025), "utkarshi"),
        )
        .await,
    ];

    for response in responses {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["error"], json!("Unauthorized"));
    }
    assert!(
        app.persistence
            .get_article(2025, ArticleSection::Utkarshi, "a1")
            .unwrap()
            .is_none()
    );
    assert_eq!(app.persistence.current_year().unwrap(), 2025);
    assert!(app.invalidator.paths().is_empty());
}

#[tokio::test]
async fn test_unauthenticated_malformed_body_is_still_unauthorized() {
    let app = create_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/team")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = create_test_app();
    let cookie: String = app.login().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/team")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, &cookie)
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["ok"], json!(false));
}

#[tokio::test]
async fn test_article_upsert_and_list() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let saved = app
        .send_json(
            "POST",
            "/api/admin/articles",
            Some(&cookie),
            &article_body("a1", json!("2025"), "utkarshi"),
        )
        .await;
    assert_eq!(saved.status, StatusCode::OK);
    assert_eq!(saved.json(), json!({ "ok": true }));

    let listed = app
        .get(
            "/api/admin/articles?year=2025&section=utkarshi",
            Some(&cookie),
        )
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    let body = listed.json();
    assert_eq!(body["articles"][0]["id"], json!("a1"));
    assert_eq!(body["articles"][0]["author"]["name"], json!("Ira"));
    assert_eq!(
        app.invalidator.paths(),
        vec!["/", "/year/2025", "/year/2025/utkarshi", "/archive"]
    );
}

#[tokio::test]
async fn test_blog_alias_saves_article() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let saved = app
        .send_json(
            "POST",
            "/api/admin/blog",
            Some(&cookie),
            &article_body("b1", json!(2025), "abohoman"),
        )
        .await;

    assert_eq!(saved.status, StatusCode::OK);
    assert!(
        app.persistence
            .get_article(2025, ArticleSection::Abohoman, "b1")
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_invalid_inputs_are_bad_requests() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let bad_year = app
        .get("/api/admin/gallery?year=abc", Some(&cookie))
        .await;
    assert_eq!(bad_year.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_year.json()["error"], json!("Invalid year"));

    let bad_section = app
        .send_json(
            "POST",
            "/api/admin/articles",
            Some(&cookie),
            &article_body("a1", json!(2025), "sports"),
        )
        .await;
    assert_eq!(bad_section.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_section.json()["error"], json!("Invalid section"));

    let missing_id = app.delete("/api/admin/projects", Some(&cookie)).await;
    assert_eq!(missing_id.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing_id.json()["error"], json!("Missing id"));
}

#[tokio::test]
async fn test_years_and_archive_flow() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let archived = app
        .send_json("POST", "/api/admin/archive", Some(&cookie), &json!({}))
        .await;
    assert_eq!(archived.status, StatusCode::OK);
    assert_eq!(
        archived.json(),
        json!({ "ok": true, "archivedYear": 2025, "newCurrentYear": 2026 })
    );

    let years = app.get("/api/admin/years", Some(&cookie)).await;
    assert_eq!(years.json()["currentYear"], json!(2026));

    let set = app
        .send_json(
            "POST",
            "/api/admin/years/current",
            Some(&cookie),
            &json!({ "year": "2025" }),
        )
        .await;
    assert_eq!(set.json(), json!({ "ok": true, "year": 2025 }));
    assert_eq!(app.persistence.current_year().unwrap(), 2025);
}

#[tokio::test]
async fn test_section_settings_round_trip() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let saved = app
        .send_json(
            "POST",
            "/api/admin/sections",
            Some(&cookie),
            &json!({
                "year": 2025,
                "sectionKey": "projects",
                "displayName": "Builds",
                "isHidden": true
            }),
        )
        .await;
    assert_eq!(saved.status, StatusCode::OK);

    let settings = app.get("/api/admin/sections?year=2025", Some(&cookie)).await;
    let body = settings.json();
    let rows = body["settings"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    let projects = rows
        .iter()
        .find(|row| row["sectionKey"] == json!("projects"))
        .unwrap();
    assert_eq!(projects["displayName"], json!("Builds"));
    assert_eq!(projects["isHidden"], json!(true));
}

#[tokio::test]
async fn test_team_cap_is_bad_request() {
    let app = create_test_app();
    let cookie: String = app.login().await;
    for index in 0..10 {
        let response = app
            .send_json(
                "POST",
                "/api/admin/team",
                Some(&cookie),
                &json!({ "year": 2025, "id": format!("m{index}"), "name": "Member" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let rejected = app
        .send_json(
            "POST",
            "/api/admin/team",
            Some(&cookie),
            &json!({ "year": 2025, "id": "m10", "name": "Member" }),
        )
        .await;

    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        rejected.json()["error"],
        json!("Maximum 10 team members are allowed per year.")
    );

    let removed = app
        .delete("/api/admin/team?year=2025&id=m0", Some(&cookie))
        .await;
    assert_eq!(removed.status, StatusCode::OK);
    let listed = app.get("/api/admin/team?year=2025", Some(&cookie)).await;
    assert_eq!(listed.json()["items"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_editorial_round_trip() {
    let app = create_test_app();
    let cookie: String = app.login().await;

    let saved = app
        .send_json(
            "POST",
            "/api/admin/editorial",
            Some(&cookie),
            &json!({
                "title": "Letters",
                "author": { "name": "Dev", "role": "Chief Editor" },
                "content": ["Hello."],
                "quote": { "text": "Onward.", "author": "Dev" }
            }),
        )
        .await;
    assert_eq!(saved.status, StatusCode::OK);

    let fetched = app.get("/api/admin/editorial", Some(&cookie)).await;
    let body = fetched.json();
    assert_eq!(body["editorial"]["title"], json!("Letters"));
    assert_eq!(body["editorial"]["quote"]["text"], json!("Onward."));
}
