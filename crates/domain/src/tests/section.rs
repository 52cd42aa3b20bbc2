// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{
    ArticleSection, DomainError, SectionKey, SectionSetting, is_section_hidden, visible_sections,
};

#[test]
fn test_default_display_name_capitalizes_key() {
    assert_eq!(SectionKey::Utkarshi.default_display_name(), "Utkarshi");
    assert_eq!(SectionKey::Projects.default_display_name(), "Projects");
}

#[test]
fn test_section_key_parses_every_key() {
    for key in SectionKey::ALL {
        assert_eq!(SectionKey::from_str(key.as_str()), Ok(key));
    }
}

#[test]
fn test_section_key_rejects_unknown_key() {
    assert_eq!(
        SectionKey::from_str("sports"),
        Err(DomainError::UnknownSection(String::from("sports")))
    );
}

#[test]
fn test_article_section_rejects_gallery_and_projects() {
    assert!(ArticleSection::from_str("gallery").is_err());
    assert!(ArticleSection::from_str("projects").is_err());
    assert_eq!(
        ArticleSection::from_str("sarvagya"),
        Ok(ArticleSection::Sarvagya)
    );
}

#[test]
fn test_defaults_for_year_covers_all_six_sections() {
    let settings: Vec<SectionSetting> = SectionSetting::defaults_for_year(2025);
    assert_eq!(settings.len(), 6);
    assert!(settings.iter().all(|s| s.year == 2025 && !s.is_hidden));
}

#[test]
fn test_visible_sections_skips_hidden_rows() {
    let mut settings: Vec<SectionSetting> = SectionSetting::defaults_for_year(2025);
    if let Some(gallery) = settings
        .iter_mut()
        .find(|s| s.section_key == SectionKey::Gallery)
    {
        gallery.is_hidden = true;
    }

    let visible: Vec<SectionSetting> = visible_sections(&settings);
    assert_eq!(visible.len(), 5);
    assert!(visible.iter().all(|s| s.section_key != SectionKey::Gallery));
    assert!(is_section_hidden(&settings, SectionKey::Gallery));
    assert!(!is_section_hidden(&settings, SectionKey::Utkarshi));
}

#[test]
fn test_section_key_serializes_lowercase() {
    let json: String = serde_json::to_string(&SectionKey::Abohoman).unwrap();
    assert_eq!(json, "\"abohoman\"");
}
