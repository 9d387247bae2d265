//! Unit tests for the in-memory bookmark collection and its three
//! reconciliation transforms (prepend-if-absent, replace-if-present,
//! remove-if-present).

use linkbox::managers::bookmark_store::BookmarkStore;
use linkbox::types::bookmark::Bookmark;
use linkbox::types::event::ChangeEvent;
use rstest::rstest;

fn bookmark(id: &str, created_at: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: format!("title-{}", id),
        url: format!("https://example.test/{}", id),
        user_id: "u1".to_string(),
        created_at: created_at.to_string(),
    }
}

#[test]
fn test_new_store_is_empty() {
    let store = BookmarkStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_replace_all_sorts_newest_first() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("a", "2026-08-01T10:00:00Z"),
        bookmark("c", "2026-08-03T10:00:00Z"),
        bookmark("b", "2026-08-02T10:00:00Z"),
    ]);

    let ids: Vec<&str> = store.entries().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
}

#[test]
fn test_prepend_if_absent_places_newest_at_front() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("b", "2026-08-02T10:00:00Z"),
        bookmark("a", "2026-08-01T10:00:00Z"),
    ]);

    store.prepend_if_absent(bookmark("c", "2026-08-03T10:00:00Z"));

    let ids: Vec<&str> = store.entries().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["c", "b", "a"]);
}

/// An insert event delivered out of creation order must not end up at
/// the front: the store re-sorts by timestamp after prepending.
#[test]
fn test_prepend_if_absent_reorders_late_arrivals() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![bookmark("c", "2026-08-03T10:00:00Z")]);

    store.prepend_if_absent(bookmark("a", "2026-08-01T10:00:00Z"));

    let ids: Vec<&str> = store.entries().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["c", "a"]);
}

#[test]
fn test_prepend_if_absent_is_idempotent() {
    let mut store = BookmarkStore::new();
    let row = bookmark("a", "2026-08-01T10:00:00Z");

    store.prepend_if_absent(row.clone());
    store.prepend_if_absent(row);

    assert_eq!(store.len(), 1);
}

#[test]
fn test_replace_if_present_swaps_in_place() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("b", "2026-08-02T10:00:00Z"),
        bookmark("a", "2026-08-01T10:00:00Z"),
    ]);

    let mut updated = bookmark("a", "2026-08-01T10:00:00Z");
    updated.title = "renamed".to_string();
    store.replace_if_present(updated);

    assert_eq!(store.entries()[1].title, "renamed");
    assert_eq!(store.entries()[0].id, "b");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_replace_if_present_unknown_id_is_noop() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![bookmark("a", "2026-08-01T10:00:00Z")]);

    store.replace_if_present(bookmark("ghost", "2026-08-05T10:00:00Z"));

    assert_eq!(store.len(), 1);
    assert!(!store.contains("ghost"));
}

#[rstest]
#[case("a", true, 1)]
#[case("missing", false, 2)]
fn test_remove_if_present(#[case] id: &str, #[case] removed: bool, #[case] remaining: usize) {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("b", "2026-08-02T10:00:00Z"),
        bookmark("a", "2026-08-01T10:00:00Z"),
    ]);

    assert_eq!(store.remove_if_present(id), removed);
    assert_eq!(store.len(), remaining);
}

/// Removing twice leaves the collection unchanged after the first
/// removal — the idempotence the redundant delete paths rely on.
#[test]
fn test_remove_if_present_is_idempotent() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("a", "2026-08-01T10:00:00Z"),
        bookmark("b", "2026-08-02T10:00:00Z"),
        bookmark("c", "2026-08-03T10:00:00Z"),
    ]);

    assert!(store.remove_if_present("b"));
    let after_first: Vec<String> = store.entries().iter().map(|b| b.id.clone()).collect();

    assert!(!store.remove_if_present("b"));
    let after_second: Vec<String> = store.entries().iter().map(|b| b.id.clone()).collect();

    assert_eq!(after_first, after_second);
    assert_eq!(after_first, ["c", "a"]);
}

#[test]
fn test_apply_dispatches_all_event_kinds() {
    let mut store = BookmarkStore::new();

    store.apply(ChangeEvent::Insert(bookmark("a", "2026-08-01T10:00:00Z")));
    assert!(store.contains("a"));

    let mut updated = bookmark("a", "2026-08-01T10:00:00Z");
    updated.url = "https://moved.test/".to_string();
    store.apply(ChangeEvent::Update(updated));
    assert_eq!(store.entries()[0].url, "https://moved.test/");

    store.apply(ChangeEvent::Delete(bookmark("a", "2026-08-01T10:00:00Z")));
    assert!(store.is_empty());
}

#[test]
fn test_clear_discards_everything() {
    let mut store = BookmarkStore::new();
    store.replace_all(vec![
        bookmark("a", "2026-08-01T10:00:00Z"),
        bookmark("b", "2026-08-02T10:00:00Z"),
    ]);

    store.clear();

    assert!(store.is_empty());
}
