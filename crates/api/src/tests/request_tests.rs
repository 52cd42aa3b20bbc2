// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request body parsing and year resolution tests.

use serde_json::json;

use crate::{
    ArchiveResponse, UpsertArticleRequest, UpsertProjectRequest, UpsertTeamMemberRequest,
    YearValue, resolve_query_year, resolve_year,
};

#[test]
fn test_year_accepts_number_or_numeric_string() {
    let from_number: UpsertTeamMemberRequest =
        serde_json::from_value(json!({ "year": 2025, "id": "m1", "name": "A" })).unwrap();
    let from_text: UpsertTeamMemberRequest =
        serde_json::from_value(json!({ "year": "2025", "id": "m1", "name": "A" })).unwrap();

    assert_eq!(from_number.year, Some(YearValue::Number(2025)));
    assert_eq!(resolve_year(from_number.year.as_ref()).unwrap(), 2025);
    assert_eq!(resolve_year(from_text.year.as_ref()).unwrap(), 2025);
}

#[test]
fn test_resolve_year_bounds() {
    assert_eq!(resolve_year(Some(&YearValue::Number(1900))).unwrap(), 1900);
    assert_eq!(resolve_year(Some(&YearValue::Number(3000))).unwrap(), 3000);
    assert!(resolve_year(Some(&YearValue::Number(1899))).is_err());
    assert!(resolve_year(Some(&YearValue::Number(3001))).is_err());
    assert!(resolve_year(None).is_err());
    assert!(resolve_query_year(Some("")).is_err());
    assert!(resolve_query_year(None).is_err());
    assert_eq!(resolve_query_year(Some("2024")).unwrap(), 2024);
}

#[test]
fn test_article_request_defaults_missing_strings() {
    let request: UpsertArticleRequest =
        serde_json::from_value(json!({ "id": "a1", "year": 2025, "section": "utkarshi" }))
            .unwrap();

    assert_eq!(request.title, "");
    assert_eq!(request.read_time, "");
    assert_eq!(request.author.name, "");
    assert!(request.paragraphs.is_empty());
    assert!(request.images.is_empty());
}

#[test]
fn test_article_request_reads_camel_case() {
    let request: UpsertArticleRequest = serde_json::from_value(json!({
        "id": "a1",
        "year": 2025,
        "section": "abohoman",
        "readTime": "6 min read",
        "author": { "name": "Ira", "role": "Editor" },
        "images": [{ "id": "img-1", "caption": "Dusk", "position": 2 }]
    }))
    .unwrap();

    assert_eq!(request.read_time, "6 min read");
    assert_eq!(request.author.role, "Editor");
    assert_eq!(request.images[0].position, 2);
}

#[test]
fn test_project_request_reads_upload_and_blobs() {
    let request: UpsertProjectRequest = serde_json::from_value(json!({
        "id": "p1",
        "year": "2025",
        "teamName": "Volt",
        "problemStatement": { "summary": "Low power sensing" },
        "files": { "report": "r.pdf" },
        "techStack": ["Rust", "Svelte"],
        "uploadedPdf": { "dataUrl": "data:application/pdf;base64,JVBERi0xLjQ=" }
    }))
    .unwrap();

    assert_eq!(request.team_name, "Volt");
    assert_eq!(request.tech_stack, vec!["Rust", "Svelte"]);
    assert_eq!(
        request.problem_statement.get("summary"),
        Some(&json!("Low power sensing"))
    );
    let upload = request.uploaded_pdf.unwrap();
    assert!(upload.data_url.starts_with("data:application/pdf"));
    assert_eq!(upload.file_name, "");
}

#[test]
fn test_archive_response_uses_camel_case_keys() {
    let response = ArchiveResponse {
        ok: true,
        archived_year: 2025,
        new_current_year: 2026,
    };

    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(
        value,
        json!({ "ok": true, "archivedYear": 2025, "newCurrentYear": 2026 })
    );
}
