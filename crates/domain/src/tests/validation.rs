// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, MAX_ID_LENGTH, MAX_SHORT_TEXT_LENGTH, SectionKey, parse_year, require_non_empty,
    resolve_display_name, validate_length, validate_lengths, validate_year,
};

#[test]
fn test_validate_year_accepts_bounds() {
    assert_eq!(validate_year(1900), Ok(1900));
    assert_eq!(validate_year(3000), Ok(3000));
}

#[test]
fn test_validate_year_rejects_out_of_range() {
    assert!(matches!(validate_year(1899), Err(DomainError::InvalidYear(_))));
    assert!(matches!(validate_year(3001), Err(DomainError::InvalidYear(_))));
    assert!(matches!(
        validate_year(i64::from(i32::MAX) + 1),
        Err(DomainError::InvalidYear(_))
    ));
}

#[test]
fn test_parse_year_trims_whitespace() {
    assert_eq!(parse_year(" 2025 "), Ok(2025));
}

#[test]
fn test_parse_year_rejects_non_integer_text() {
    assert!(parse_year("2025.5").is_err());
    assert!(parse_year("twenty").is_err());
    assert!(parse_year("").is_err());
}

#[test]
fn test_require_non_empty_trims_and_rejects_blank() {
    assert_eq!(require_non_empty("name", "  Asha "), Ok(String::from("Asha")));
    assert_eq!(
        require_non_empty("name", "   "),
        Err(DomainError::MissingField { field: "name" })
    );
}

#[test]
fn test_blank_display_name_falls_back_to_section_key() {
    assert_eq!(resolve_display_name("  ", SectionKey::Prayukti), "prayukti");
    assert_eq!(
        resolve_display_name(" Tech Corner ", SectionKey::Prayukti),
        "Tech Corner"
    );
}

#[test]
fn test_validate_length_counts_characters_not_bytes() {
    let at_limit: String = "\u{0985}".repeat(MAX_ID_LENGTH);
    let over_limit: String = "a".repeat(MAX_ID_LENGTH + 1);

    assert_eq!(validate_length("id", &at_limit, MAX_ID_LENGTH), Ok(()));
    assert_eq!(
        validate_length("id", &over_limit, MAX_ID_LENGTH),
        Err(DomainError::FieldTooLong {
            field: "id",
            max: MAX_ID_LENGTH
        })
    );
}

#[test]
fn test_validate_lengths_reports_first_oversized_field() {
    let long_role: String = "r".repeat(MAX_SHORT_TEXT_LENGTH + 1);
    let long_name: String = "n".repeat(MAX_SHORT_TEXT_LENGTH + 1);

    let err = validate_lengths(&[
        ("id", "ok", MAX_ID_LENGTH),
        ("role", long_role.as_str(), MAX_SHORT_TEXT_LENGTH),
        ("name", long_name.as_str(), MAX_SHORT_TEXT_LENGTH),
    ])
    .unwrap_err();

    assert_eq!(err.to_string(), "Field 'role' must be at most 255 characters");
}
