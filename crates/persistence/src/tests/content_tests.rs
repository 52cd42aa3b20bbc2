// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ingenium_domain::{
    Article, ArticleSection, Author, CurrentYearData, EditorialContent, GalleryItem, GalleryKind,
    HomeData, Quote, calendar_year,
};

use crate::Persistence;
use crate::tests::{
    create_test_persistence, sample_article, sample_gallery_item, wait_for_next_timestamp,
};

#[test]
fn test_article_round_trips_through_storage() {
    let persistence: Persistence = create_test_persistence();
    let article: Article = sample_article("a-1", 2024, ArticleSection::Abohoman);

    persistence.upsert_article(&article).unwrap();

    let stored: Option<Article> = persistence
        .get_article(2024, ArticleSection::Abohoman, "a-1")
        .unwrap();
    assert_eq!(stored, Some(article));
}

#[test]
fn test_get_article_requires_matching_section() {
    let persistence: Persistence = create_test_persistence();
    persistence
        .upsert_article(&sample_article("a-1", 2024, ArticleSection::Abohoman))
        .unwrap();

    let stored: Option<Article> = persistence
        .get_article(2024, ArticleSection::Sarvagya, "a-1")
        .unwrap();
    assert_eq!(stored, None);
}

#[test]
fn test_upsert_article_twice_keeps_one_row() {
    let persistence: Persistence = create_test_persistence();
    let mut article: Article = sample_article("a-1", 2024, ArticleSection::Utkarshi);
    persistence.upsert_article(&article).unwrap();

    article.title = String::from("Revised title");
    persistence.upsert_article(&article).unwrap();

    let listed: Vec<Article> = persistence
        .list_section_articles(2024, ArticleSection::Utkarshi)
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Revised title");
}

#[test]
fn test_upsert_article_can_move_section_and_year() {
    let persistence: Persistence = create_test_persistence();
    let mut article: Article = sample_article("a-1", 2024, ArticleSection::Utkarshi);
    persistence.upsert_article(&article).unwrap();

    article.year = 2023;
    article.section = ArticleSection::Prayukti;
    persistence.upsert_article(&article).unwrap();

    assert!(
        persistence
            .list_section_articles(2024, ArticleSection::Utkarshi)
            .unwrap()
            .is_empty()
    );
    assert_eq!(
        persistence
            .list_section_articles(2023, ArticleSection::Prayukti)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_section_articles_are_listed_most_recently_updated_first() {
    let persistence: Persistence = create_test_persistence();
    let first: Article = sample_article("a-1", 2024, ArticleSection::Sarvagya);
    persistence.upsert_article(&first).unwrap();
    wait_for_next_timestamp();
    persistence
        .upsert_article(&sample_article("a-2", 2024, ArticleSection::Sarvagya))
        .unwrap();
    wait_for_next_timestamp();
    persistence.upsert_article(&first).unwrap();

    let ids: Vec<String> = persistence
        .list_section_articles(2024, ArticleSection::Sarvagya)
        .unwrap()
        .into_iter()
        .map(|article| article.id)
        .collect();
    assert_eq!(ids, vec![String::from("a-1"), String::from("a-2")]);
}

#[test]
fn test_year_data_groups_articles_newest_created_first() {
    let persistence: Persistence = create_test_persistence();
    let older: Article = sample_article("a-1", 2024, ArticleSection::Prayukti);
    persistence.upsert_article(&older).unwrap();
    wait_for_next_timestamp();
    persistence
        .upsert_article(&sample_article("a-2", 2024, ArticleSection::Prayukti))
        .unwrap();
    persistence
        .upsert_article(&sample_article("a-3", 2024, ArticleSection::Abohoman))
        .unwrap();
    wait_for_next_timestamp();
    // Updating does not change creation order.
    persistence.upsert_article(&older).unwrap();

    let data: HomeData = persistence.year_data(2024).unwrap();

    let prayukti: Vec<&str> = data.prayukti.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(prayukti, vec!["a-2", "a-1"]);
    assert_eq!(data.abohoman.len(), 1);
    assert!(data.utkarshi.is_empty());
    assert!(data.sarvagya.is_empty());
}

#[test]
fn test_current_year_data_uses_current_year() {
    let persistence: Persistence = create_test_persistence();
    let year: i32 = calendar_year();
    persistence
        .upsert_article(&sample_article("a-1", year, ArticleSection::Utkarshi))
        .unwrap();
    persistence
        .upsert_article(&sample_article("a-2", year - 1, ArticleSection::Utkarshi))
        .unwrap();

    let current: CurrentYearData = persistence.current_year_data().unwrap();

    assert_eq!(current.current_year, year);
    assert_eq!(current.data.utkarshi.len(), 1);
    assert_eq!(current.data.utkarshi[0].id, "a-1");
}

#[test]
fn test_delete_article_is_idempotent() {
    let persistence: Persistence = create_test_persistence();
    persistence
        .upsert_article(&sample_article("a-1", 2024, ArticleSection::Utkarshi))
        .unwrap();

    assert_eq!(
        persistence.delete_article("a-1").unwrap(),
        Some((2024, ArticleSection::Utkarshi))
    );
    assert_eq!(persistence.delete_article("a-1").unwrap(), None);

    assert_eq!(
        persistence
            .get_article(2024, ArticleSection::Utkarshi, "a-1")
            .unwrap(),
        None
    );
}

#[test]
fn test_gallery_item_round_trips_through_storage() {
    let persistence: Persistence = create_test_persistence();
    let mut item: GalleryItem = sample_gallery_item("g-1", 2024, GalleryKind::Drawing);
    item.rank = String::from("1st");
    item.folder_context = String::from("Inter-college contest");

    persistence.upsert_gallery_item(&item).unwrap();

    assert_eq!(
        persistence.get_gallery_item(2024, "g-1").unwrap(),
        Some(item)
    );
}

#[test]
fn test_gallery_items_are_scoped_by_year() {
    let persistence: Persistence = create_test_persistence();
    persistence
        .upsert_gallery_item(&sample_gallery_item("g-1", 2024, GalleryKind::Photograph))
        .unwrap();
    persistence
        .upsert_gallery_item(&sample_gallery_item("g-2", 2023, GalleryKind::Photograph))
        .unwrap();

    let items: Vec<GalleryItem> = persistence.list_gallery_items(2024).unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "g-1");
    assert_eq!(persistence.get_gallery_item(2023, "g-1").unwrap(), None);
}

#[test]
fn test_delete_gallery_item() {
    let persistence: Persistence = create_test_persistence();
    persistence
        .upsert_gallery_item(&sample_gallery_item("g-1", 2024, GalleryKind::Photograph))
        .unwrap();

    persistence.delete_gallery_item("g-1").unwrap();

    assert!(persistence.list_gallery_items(2024).unwrap().is_empty());
}

#[test]
fn test_editorial_content_is_overwritten() {
    let persistence: Persistence = create_test_persistence();
    let content: EditorialContent = EditorialContent {
        title: String::from("A Year in Print"),
        author: Author {
            name: String::from("Prof. Mitra"),
            role: String::from("Faculty Advisor"),
        },
        date: String::from("April 2026"),
        content: vec![String::from("Welcome."), String::from("Enjoy the issue.")],
        quote: Quote {
            text: String::from("Stay curious."),
            author: String::from("Anonymous"),
        },
    };

    persistence.upsert_editorial_content(&content).unwrap();
    persistence.upsert_editorial_content(&content).unwrap();

    assert_eq!(persistence.editorial_content().unwrap(), content);
}
