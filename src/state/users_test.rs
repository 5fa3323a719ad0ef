use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(id: u64, first_name: &str) -> User {
    User {
        id,
        first_name: first_name.to_owned(),
        last_name: "Prueba".to_owned(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        status: true,
        birthday: "1990-01-01T00:00:00.000Z".to_owned(),
        skills: vec!["rust".to_owned()],
        avatar: vec![],
    }
}

fn make_draft(first_name: &str) -> UserDraft {
    UserDraft {
        first_name: first_name.to_owned(),
        last_name: "Nueva".to_owned(),
        email: format!("{}@example.com", first_name.to_lowercase()),
        status: true,
        birthday: "2024-06-01T12:00:00.000Z".to_owned(),
        skills: vec!["react".to_owned(), "typescript".to_owned()],
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn users_state_defaults() {
    let s = UsersState::default();
    assert!(s.remote.is_empty());
    assert!(s.local.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert!(!s.active_only);
    assert!(!s.form_open);
    assert!(s.rows().is_empty());
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_clears_error() {
    let mut s = UsersState::default();
    s.error = Some("anterior".to_owned());
    s.begin_fetch();
    assert!(s.loading);
    assert!(s.error.is_none());
}

#[test]
fn finish_fetch_success_replaces_remote_wholesale() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(1, "Vieja")];
    let seq = s.begin_fetch();
    let applied = s.finish_fetch(seq, Ok(vec![make_user(2, "Ana"), make_user(3, "Beto")]));
    assert!(applied);
    assert_eq!(s.remote.len(), 2);
    assert_eq!(s.remote[0].id, 2);
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn finish_fetch_failure_sets_message_and_keeps_previous_remote() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(1, "Ana")];
    let seq = s.begin_fetch();
    let applied = s.finish_fetch(seq, Err(FetchError::Http(500)));
    assert!(applied);
    assert_eq!(s.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    assert_eq!(s.remote.len(), 1);
    assert!(!s.loading);
}

#[test]
fn finish_fetch_discards_stale_generation() {
    let mut s = UsersState::default();
    let first = s.begin_fetch();
    let second = s.begin_fetch();

    // The second-issued fetch resolves first and wins.
    assert!(s.finish_fetch(second, Ok(vec![make_user(10, "Reciente")])));
    assert!(!s.loading);

    // The first-issued fetch resolves late and is discarded.
    assert!(!s.finish_fetch(first, Ok(vec![make_user(99, "Obsoleta")])));
    assert_eq!(s.remote.len(), 1);
    assert_eq!(s.remote[0].id, 10);
}

#[test]
fn stale_error_does_not_overwrite_fresh_success() {
    let mut s = UsersState::default();
    let first = s.begin_fetch();
    let second = s.begin_fetch();
    assert!(s.finish_fetch(second, Ok(vec![make_user(1, "Ana")])));
    assert!(!s.finish_fetch(first, Err(FetchError::Network("timeout".to_owned()))));
    assert!(s.error.is_none());
    assert_eq!(s.remote.len(), 1);
}

// =============================================================
// Merge-for-display
// =============================================================

#[test]
fn rows_are_remote_then_local_in_order() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(1, "Ana"), make_user(2, "Beto")];
    s.add_user(make_draft("Carla"));

    let rows = s.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].user.id, 1);
    assert_eq!(rows[0].origin, Origin::Remote);
    assert_eq!(rows[1].user.id, 2);
    assert_eq!(rows[1].origin, Origin::Remote);
    assert_eq!(rows[2].user.first_name, "Carla");
    assert_eq!(rows[2].origin, Origin::Local);
}

#[test]
fn origin_labels() {
    assert_eq!(Origin::Remote.label(), "API");
    assert_eq!(Origin::Local.label(), "Local");
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_assigns_max_plus_one() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(3, "Ana"), make_user(7, "Beto")];
    let id = s.add_user(make_draft("Carla"));
    assert_eq!(id, 8);
    assert_eq!(s.local.len(), 1);
    assert_eq!(s.local[0].id, 8);
}

#[test]
fn add_on_empty_collection_assigns_one() {
    let mut s = UsersState::default();
    let id = s.add_user(make_draft("Ana"));
    assert_eq!(id, 1);
}

#[test]
fn add_attaches_placeholder_avatar() {
    let mut s = UsersState::default();
    s.add_user(make_draft("Ana"));
    assert_eq!(s.local[0].avatar.len(), 1);
    assert_eq!(s.local[0].avatar[0].name, "placeholder");
}

#[test]
fn add_preserves_draft_fields() {
    let mut s = UsersState::default();
    let draft = make_draft("Carla");
    s.add_user(draft.clone());
    let added = &s.local[0];
    assert_eq!(added.first_name, draft.first_name);
    assert_eq!(added.last_name, draft.last_name);
    assert_eq!(added.email, draft.email);
    assert_eq!(added.status, draft.status);
    assert_eq!(added.birthday, draft.birthday);
    assert_eq!(added.skills, draft.skills);
}

#[test]
fn ids_are_not_reused_after_deleting_the_highest_local() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(5, "Ana")];
    let first = s.add_user(make_draft("Beto"));
    assert_eq!(first, 6);
    s.delete_local(first).unwrap();
    let second = s.add_user(make_draft("Carla"));
    assert_eq!(second, 7);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_remote_id_is_rejected_without_state_change() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(1, "Ana")];
    s.add_user(make_draft("Beto"));

    assert_eq!(s.delete_local(1), Err(DeleteError::NotLocal));
    assert_eq!(s.remote.len(), 1);
    assert_eq!(s.local.len(), 1);
}

#[test]
fn delete_unknown_id_is_rejected() {
    let mut s = UsersState::default();
    assert_eq!(s.delete_local(42), Err(DeleteError::NotLocal));
}

#[test]
fn delete_local_removes_exactly_that_record() {
    let mut s = UsersState::default();
    let first = s.add_user(make_draft("Ana"));
    let second = s.add_user(make_draft("Beto"));
    let third = s.add_user(make_draft("Carla"));

    assert!(s.delete_local(second).is_ok());
    let remaining: Vec<u64> = s.local.iter().map(|u| u.id).collect();
    assert_eq!(remaining, vec![first, third]);
}

#[test]
fn is_local_distinguishes_origins() {
    let mut s = UsersState::default();
    s.remote = vec![make_user(1, "Ana")];
    let id = s.add_user(make_draft("Beto"));
    assert!(!s.is_local(1));
    assert!(s.is_local(id));
}

// =============================================================
// Scenario: empty remote + one local add
// =============================================================

#[test]
fn empty_remote_plus_one_add_shows_single_local_row() {
    let mut s = UsersState::default();
    let seq = s.begin_fetch();
    s.finish_fetch(seq, Ok(vec![]));
    let id = s.add_user(make_draft("Ana"));

    let rows = s.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].origin, Origin::Local);
    assert_eq!(id, 1);
}
