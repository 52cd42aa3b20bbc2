// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ingenium_domain::{MAX_TEAM_MEMBERS_PER_YEAR, TeamMember};

use crate::tests::{create_test_persistence, sample_team_member};
use crate::{Persistence, PersistenceError};

fn fill_year(persistence: &Persistence, year: i32) {
    for index in 0..MAX_TEAM_MEMBERS_PER_YEAR {
        persistence
            .upsert_team_member(&sample_team_member(&format!("m-{index}"), year))
            .unwrap();
    }
}

#[test]
fn test_team_member_round_trips_through_storage() {
    let persistence: Persistence = create_test_persistence();
    let mut member: TeamMember = sample_team_member("m-1", 2024);
    member.linkedin = String::from("https://linkedin.com/in/member");

    persistence.upsert_team_member(&member).unwrap();

    assert_eq!(
        persistence.get_team_member(2024, "m-1").unwrap(),
        Some(member)
    );
}

#[test]
fn test_eleventh_member_is_rejected() {
    let persistence: Persistence = create_test_persistence();
    fill_year(&persistence, 2024);

    let result: Result<(), PersistenceError> =
        persistence.upsert_team_member(&sample_team_member("m-extra", 2024));

    assert_eq!(
        result,
        Err(PersistenceError::TeamCapacityExceeded {
            year: 2024,
            max: MAX_TEAM_MEMBERS_PER_YEAR,
        })
    );
    assert_eq!(
        persistence.list_team_members(2024).unwrap().len(),
        usize::try_from(MAX_TEAM_MEMBERS_PER_YEAR).unwrap()
    );
}

#[test]
fn test_capacity_message() {
    let err: PersistenceError = PersistenceError::TeamCapacityExceeded {
        year: 2024,
        max: MAX_TEAM_MEMBERS_PER_YEAR,
    };
    assert_eq!(err.to_string(), "Maximum 10 team members are allowed per year.");
}

#[test]
fn test_updates_are_allowed_in_full_year() {
    let persistence: Persistence = create_test_persistence();
    fill_year(&persistence, 2024);

    let mut member: TeamMember = sample_team_member("m-0", 2024);
    member.role = String::from("Editor in Chief");
    persistence.upsert_team_member(&member).unwrap();

    assert_eq!(
        persistence.get_team_member(2024, "m-0").unwrap().unwrap().role,
        "Editor in Chief"
    );
}

#[test]
fn test_capacity_is_per_year() {
    let persistence: Persistence = create_test_persistence();
    fill_year(&persistence, 2024);

    persistence
        .upsert_team_member(&sample_team_member("m-0", 2025))
        .unwrap();

    assert_eq!(persistence.list_team_members(2025).unwrap().len(), 1);
}

#[test]
fn test_same_id_in_two_years_is_two_members() {
    let persistence: Persistence = create_test_persistence();
    persistence
        .upsert_team_member(&sample_team_member("m-1", 2024))
        .unwrap();
    persistence
        .upsert_team_member(&sample_team_member("m-1", 2025))
        .unwrap();

    persistence.delete_team_member(2024, "m-1").unwrap();

    assert_eq!(persistence.get_team_member(2024, "m-1").unwrap(), None);
    assert!(persistence.get_team_member(2025, "m-1").unwrap().is_some());
}

#[test]
fn test_delete_frees_capacity() {
    let persistence: Persistence = create_test_persistence();
    fill_year(&persistence, 2024);

    persistence.delete_team_member(2024, "m-3").unwrap();
    persistence.delete_team_member(2024, "m-3").unwrap();

    persistence
        .upsert_team_member(&sample_team_member("m-new", 2024))
        .unwrap();
}
