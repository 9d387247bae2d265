//! Property-based test for the refresh path: whatever order rows were
//! written in, a refresh always yields a collection sorted by creation
//! timestamp descending.

use linkbox::backend::MemoryBackend;
use linkbox::managers::bookmark_store::BookmarkStore;
use linkbox::services::bookmark_service::BookmarkService;
use proptest::prelude::*;

/// Strategy for RFC 3339 timestamps in a fixed-width format, so
/// lexicographic and chronological order coincide.
fn arb_timestamp() -> impl Strategy<Value = String> {
    (1u8..=28, 0u8..24, 0u8..60, 0u8..60).prop_map(|(day, hour, min, sec)| {
        format!("2026-08-{:02}T{:02}:{:02}:{:02}Z", day, hour, min, sec)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any multiset of creation timestamps written in any order,
    /// refresh returns the owner's rows newest-first and nothing else.
    #[test]
    fn refresh_is_sorted_newest_first(timestamps in proptest::collection::vec(arb_timestamp(), 0..16)) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        rt.block_on(async {
            let backend = MemoryBackend::new().expect("in-memory backend should open");
            let service = BookmarkService::new(backend.clone());
            let mut store = BookmarkStore::new();

            for (i, ts) in timestamps.iter().enumerate() {
                backend
                    .seed("u1", &format!("b{}", i), "https://x.test", ts)
                    .expect("seed should succeed");
            }
            // A row for another owner must never show up.
            backend
                .seed("u2", "foreign", "https://foreign.test", "2026-08-15T12:00:00Z")
                .expect("seed should succeed");

            service.refresh_into("u1", &mut store).await;

            prop_assert_eq!(store.len(), timestamps.len());
            prop_assert!(store.entries().iter().all(|b| b.user_id == "u1"));
            for pair in store.entries().windows(2) {
                prop_assert!(
                    pair[0].created_at >= pair[1].created_at,
                    "rows out of order: {} before {}",
                    pair[0].created_at,
                    pair[1].created_at
                );
            }
            Ok(())
        })?;
    }
}
