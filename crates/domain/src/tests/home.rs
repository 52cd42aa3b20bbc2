// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_article;
use crate::{Article, ArticleSection, HomeData, SectionKey, SectionSetting};

fn sample_articles() -> Vec<Article> {
    vec![
        create_test_article("a1", 2025, ArticleSection::Utkarshi),
        create_test_article("a2", 2025, ArticleSection::Sarvagya),
        create_test_article("a3", 2025, ArticleSection::Utkarshi),
    ]
}

#[test]
fn test_assemble_groups_by_section_preserving_order() {
    let settings: Vec<SectionSetting> = SectionSetting::defaults_for_year(2025);
    let data: HomeData = HomeData::assemble(sample_articles(), &settings);

    let ids: Vec<&str> = data
        .section(ArticleSection::Utkarshi)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["a1", "a3"]);
    assert_eq!(data.sarvagya.len(), 1);
    assert!(data.abohoman.is_empty());
}

#[test]
fn test_assemble_drops_hidden_sections() {
    let mut settings: Vec<SectionSetting> = SectionSetting::defaults_for_year(2025);
    for setting in &mut settings {
        if setting.section_key == SectionKey::Sarvagya {
            setting.is_hidden = true;
        }
    }

    let data: HomeData = HomeData::assemble(sample_articles(), &settings);
    assert!(data.sarvagya.is_empty());
    assert_eq!(data.utkarshi.len(), 2);
}
