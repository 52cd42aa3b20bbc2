// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_persistence;
use crate::{
    AdminIdentity, AdminUserData, Persistence, generate_session_token, hash_password,
    hash_session_token, unix_now, verify_password,
};

#[test]
fn test_password_hash_verifies() {
    let stored: String = hash_password("correct horse").unwrap();

    assert!(verify_password("correct horse", &stored));
    assert!(!verify_password("wrong horse", &stored));
}

#[test]
fn test_password_hash_format() {
    let stored: String = hash_password("secret").unwrap();
    let (salt, hash) = stored.split_once(':').unwrap();

    assert_eq!(salt.len(), 32);
    assert_eq!(hash.len(), 128);
    assert_ne!(stored, hash_password("secret").unwrap(), "salts differ");
}

#[test]
fn test_malformed_stored_hash_never_verifies() {
    assert!(!verify_password("secret", ""));
    assert!(!verify_password("secret", "no-separator"));
    assert!(!verify_password("secret", ":abcd"));
    assert!(!verify_password("secret", "zz:zz"));
    assert!(!verify_password("secret", "00112233445566778899aabbccddeeff:abcd"));
}

#[test]
fn test_session_tokens_are_unique_hex() {
    let first: String = generate_session_token();
    let second: String = generate_session_token();

    assert_eq!(first.len(), 96);
    assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(first, second);
    assert_eq!(hash_session_token(&first).len(), 64);
    assert_eq!(hash_session_token(&first), hash_session_token(&first));
}

#[test]
fn test_create_and_find_admin() {
    let persistence: Persistence = create_test_persistence();

    let id: i64 = persistence
        .ensure_admin_user("editor@example.org", "secret")
        .unwrap()
        .id;

    let admin: AdminUserData = persistence
        .find_admin_by_email("editor@example.org")
        .unwrap()
        .unwrap();
    assert_eq!(admin.id, id);
    assert!(verify_password("secret", &admin.password_hash));
    assert_eq!(persistence.find_admin_by_email("other@example.org").unwrap(), None);
}

#[test]
fn test_ensure_admin_user_keeps_existing_password() {
    let persistence: Persistence = create_test_persistence();
    let created: AdminUserData = persistence
        .ensure_admin_user("editor@example.org", "first")
        .unwrap();

    let again: AdminUserData = persistence
        .ensure_admin_user("editor@example.org", "second")
        .unwrap();

    assert_eq!(created, again);
    assert!(verify_password("first", &again.password_hash));
}

#[test]
fn test_session_resolves_to_admin() {
    let persistence: Persistence = create_test_persistence();
    let id: i64 = persistence
        .ensure_admin_user("editor@example.org", "secret")
        .unwrap()
        .id;
    let token: String = generate_session_token();

    persistence
        .create_session(&token, id, unix_now() + 3600)
        .unwrap();

    assert_eq!(
        persistence.find_session_admin(&token).unwrap(),
        Some(AdminIdentity {
            id,
            email: String::from("editor@example.org"),
        })
    );
    assert_eq!(
        persistence
            .find_session_admin(&generate_session_token())
            .unwrap(),
        None
    );
}

#[test]
fn test_expired_session_is_ignored_and_purged() {
    let persistence: Persistence = create_test_persistence();
    let id: i64 = persistence
        .ensure_admin_user("editor@example.org", "secret")
        .unwrap()
        .id;
    let expired: String = generate_session_token();
    let live: String = generate_session_token();
    persistence.create_session(&expired, id, unix_now() - 10).unwrap();
    persistence.create_session(&live, id, unix_now() + 3600).unwrap();

    assert_eq!(persistence.find_session_admin(&expired).unwrap(), None);
    assert_eq!(persistence.delete_expired_sessions().unwrap(), 1);
    assert!(persistence.find_session_admin(&live).unwrap().is_some());
}

#[test]
fn test_delete_session_is_idempotent() {
    let persistence: Persistence = create_test_persistence();
    let id: i64 = persistence
        .ensure_admin_user("editor@example.org", "secret")
        .unwrap()
        .id;
    let token: String = generate_session_token();
    persistence.create_session(&token, id, unix_now() + 3600).unwrap();

    persistence.delete_session(&token).unwrap();
    persistence.delete_session(&token).unwrap();

    assert_eq!(persistence.find_session_admin(&token).unwrap(), None);
}
