// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod admin_tests;
mod content_tests;
mod team_tests;

use ingenium_domain::{
    Article, ArticleImage, ArticleSection, Author, GalleryItem, GalleryKind, JsonObject,
    Photographer, ProjectInput, ProjectTeam, TeamMember,
};
use std::path::Path;
use std::sync::Barrier;
use std::time::Duration;

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Opens `count` independent handles (each with its own pool and schema
/// flag) on the `SQLite` file at `path`, like separate server processes.
pub fn open_file_handles(path: &Path, count: usize) -> Vec<Persistence> {
    (0..count)
        .map(|_| Persistence::new_with_file(path).expect("Failed to open file persistence"))
        .collect()
}

/// Runs `f` once per handle on its own thread, releasing all threads at
/// the same moment, and returns the results in handle order.
pub fn run_concurrently<T, F>(handles: &[Persistence], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, &Persistence) -> T + Sync,
{
    let barrier: Barrier = Barrier::new(handles.len());
    std::thread::scope(|scope| {
        let workers: Vec<_> = handles
            .iter()
            .enumerate()
            .map(|(index, handle)| {
                let barrier: &Barrier = &barrier;
                let f: &F = &f;
                scope.spawn(move || {
                    barrier.wait();
                    f(index, handle)
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker thread panicked"))
            .collect()
    })
}

/// Sleeps long enough for the next write to get a later `updated_at`.
pub fn wait_for_next_timestamp() {
    std::thread::sleep(Duration::from_millis(5));
}

pub fn sample_article(id: &str, year: i32, section: ArticleSection) -> Article {
    Article {
        id: id.to_string(),
        year,
        section,
        title: format!("Article {id}"),
        excerpt: String::from("A short excerpt"),
        date: String::from("March 2026"),
        read_time: String::from("5 min read"),
        author: Author {
            name: String::from("Ananya Sen"),
            role: String::from("Student Editor"),
        },
        paragraphs: vec![String::from("First paragraph."), String::from("Second.")],
        images: vec![ArticleImage {
            id: String::from("img-1"),
            caption: Some(String::from("Campus at dawn")),
            position: 1,
        }],
    }
}

pub fn sample_gallery_item(id: &str, year: i32, kind: GalleryKind) -> GalleryItem {
    GalleryItem {
        id: id.to_string(),
        year,
        kind,
        title: format!("Gallery {id}"),
        description: String::from("Evening light"),
        image_id: format!("image-{id}"),
        photographer: Photographer {
            name: String::from("Rohan Das"),
            dept: String::from("CSE"),
            year: String::from("2nd Year"),
        },
        rank: String::new(),
        folder_context: String::new(),
    }
}

pub fn sample_project_input(id: &str, year: i32) -> ProjectInput {
    let mut files: JsonObject = JsonObject::new();
    files.insert(
        String::from("report"),
        serde_json::Value::String(String::from("report.docx")),
    );

    ProjectInput {
        id: id.to_string(),
        year,
        title: format!("Project {id}"),
        excerpt: String::from("A line follower robot"),
        category: String::from("Robotics"),
        team: ProjectTeam {
            name: String::from("Team Volt"),
        },
        pdf_link: String::from("https://example.org/report.pdf"),
        problem_statement: JsonObject::new(),
        files,
        tech_stack: vec![String::from("Arduino"), String::from("C++")],
        created_at: String::from("January 2026"),
        uploaded_pdf: None,
    }
}

pub fn sample_team_member(id: &str, year: i32) -> TeamMember {
    TeamMember {
        year,
        id: id.to_string(),
        name: format!("Member {id}"),
        role: String::from("Designer"),
        department: String::from("ECE"),
        year_label: String::from("3rd Year"),
        image_id: format!("photo-{id}"),
        linkedin: String::new(),
        github: String::new(),
    }
}
