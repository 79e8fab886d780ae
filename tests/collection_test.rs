use cinelog::collection::{CollectionClient, LocalCollection};
use cinelog::error::ApiError;
use cinelog::store::{KEY_MOVIES, KeyValueStore};
use cinelog::types::{FilterSpec, MovieDraft, MoviePatch, WatchStatus};
use tempfile::TempDir;

// Store rooted in a temp dir; the dir must be kept alive by the caller.
fn test_client() -> (TempDir, KeyValueStore, CollectionClient) {
    let dir = tempfile::tempdir().unwrap();
    let store = KeyValueStore::with_root(dir.path().to_path_buf());
    let client = CollectionClient::local(LocalCollection::new(store.clone()));
    (dir, store, client)
}

fn draft(title: &str, genre: &str, status: WatchStatus) -> MovieDraft {
    MovieDraft {
        title: title.to_string(),
        director: "Test Director".to_string(),
        year: 2020,
        genre: genre.to_string(),
        rating: None,
        status,
        review: None,
        is_favorite: false,
    }
}

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let (_dir, _store, mut client) = test_client();

    assert!(client.list(&FilterSpec::default()).await.unwrap().is_empty());

    let submitted = MovieDraft {
        title: "Dune".to_string(),
        director: "Villeneuve".to_string(),
        year: 2024,
        genre: "Sci-Fi".to_string(),
        rating: None,
        status: WatchStatus::WantToWatch,
        review: None,
        is_favorite: false,
    };
    let created = client.create(submitted.clone()).await.unwrap();

    assert_eq!(created.title, submitted.title);
    assert_eq!(created.director, submitted.director);
    assert_eq!(created.year, submitted.year);
    assert_eq!(created.genre, submitted.genre);
    assert_eq!(created.status, submitted.status);
    assert!(created.date_added.is_some());

    let listed = client.list(&FilterSpec::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn test_failed_create_performs_no_persistence() {
    let (_dir, store, mut client) = test_client();

    let mut invalid = draft("", "Sci-Fi", WatchStatus::Watched);
    invalid.year = 1899;

    match client.create(invalid).await {
        Err(ApiError::Validation(issues)) => {
            assert!(issues.has("title"));
            assert!(issues.has("year"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    // Nothing was written to the store
    assert!(!store.contains(KEY_MOVIES).await);
}

#[tokio::test]
async fn test_get_by_id() {
    let (_dir, _store, mut client) = test_client();

    let created = client
        .create(draft("Heat", "Crime", WatchStatus::Watched))
        .await
        .unwrap();

    assert_eq!(client.get(created.id).await.unwrap(), created);
    assert!(matches!(client.get(created.id + 1).await, Err(ApiError::NotFound)));
}

#[tokio::test]
async fn test_minted_ids_are_unique() {
    let (_dir, _store, mut client) = test_client();

    for i in 0..5 {
        client
            .create(draft(&format!("Movie {}", i), "Drama", WatchStatus::Watched))
            .await
            .unwrap();
    }

    let movies = client.list(&FilterSpec::default()).await.unwrap();
    let mut ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn test_update_merges_only_given_fields() {
    let (_dir, _store, mut client) = test_client();

    let created = client
        .create(draft("Alien", "Horror", WatchStatus::WantToWatch))
        .await
        .unwrap();

    let patch = MoviePatch {
        status: Some(WatchStatus::Watched),
        rating: Some(9.0),
        ..MoviePatch::default()
    };
    let updated = client.update(created.id, patch).await.unwrap();

    assert_eq!(updated.status, WatchStatus::Watched);
    assert_eq!(updated.rating, Some(9.0));
    // Untouched fields survive the merge
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.director, created.director);
    assert_eq!(updated.genre, created.genre);
    assert_eq!(updated.date_added, created.date_added);
    assert_eq!(updated.id, created.id);
}

#[tokio::test]
async fn test_patch_leaves_omitted_optional_fields_in_place() {
    let (_dir, _store, mut client) = test_client();

    let created = client
        .create(draft("Alien", "Horror", WatchStatus::Watched))
        .await
        .unwrap();
    let rated = client
        .update(
            created.id,
            MoviePatch {
                rating: Some(8.0),
                review: Some("Tense.".to_string()),
                ..MoviePatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(rated.rating, Some(8.0));

    // A later patch that omits rating and review leaves both set; a patch
    // cannot clear an optional field, only overwrite it
    let retitled = client
        .update(
            created.id,
            MoviePatch {
                title: Some("Alien (1979)".to_string()),
                ..MoviePatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(retitled.rating, Some(8.0));
    assert_eq!(retitled.review.as_deref(), Some("Tense."));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (_dir, _store, mut client) = test_client();

    let patch = MoviePatch {
        title: Some("Renamed".to_string()),
        ..MoviePatch::default()
    };
    assert!(matches!(
        client.update(12345, patch).await,
        Err(ApiError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_validates_patch() {
    let (_dir, _store, mut client) = test_client();

    let created = client
        .create(draft("Alien", "Horror", WatchStatus::Watched))
        .await
        .unwrap();

    let patch = MoviePatch {
        rating: Some(0.5),
        ..MoviePatch::default()
    };
    match client.update(created.id, patch).await {
        Err(ApiError::Validation(issues)) => assert!(issues.has("rating")),
        other => panic!("expected validation error, got {:?}", other),
    }

    // The stored record is untouched
    let movies = client.list(&FilterSpec::default()).await.unwrap();
    assert_eq!(movies[0].rating, None);
}

#[tokio::test]
async fn test_remove_deletes_exactly_one() {
    let (_dir, _store, mut client) = test_client();

    let a = client.create(draft("A", "Drama", WatchStatus::Watched)).await.unwrap();
    let b = client.create(draft("B", "Drama", WatchStatus::Watched)).await.unwrap();
    let c = client.create(draft("C", "Drama", WatchStatus::Watched)).await.unwrap();

    client.remove(b.id).await.unwrap();

    let movies = client.list(&FilterSpec::default()).await.unwrap();
    assert_eq!(movies.len(), 2);
    let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&c.id));
    assert!(!ids.contains(&b.id));
}

#[tokio::test]
async fn test_remove_unknown_id_is_not_found() {
    let (_dir, _store, mut client) = test_client();

    client.create(draft("A", "Drama", WatchStatus::Watched)).await.unwrap();

    assert!(matches!(client.remove(999).await, Err(ApiError::NotFound)));

    // The existing record is untouched
    let movies = client.list(&FilterSpec::default()).await.unwrap();
    assert_eq!(movies.len(), 1);
}

#[tokio::test]
async fn test_toggle_favorite_flips_exactly_one() {
    let (_dir, _store, mut client) = test_client();

    let a = client.create(draft("A", "Drama", WatchStatus::Watched)).await.unwrap();
    let b = client.create(draft("B", "Drama", WatchStatus::Watched)).await.unwrap();

    assert!(client.toggle_favorite(a.id).await.unwrap());

    let movies = client.list(&FilterSpec::default()).await.unwrap();
    let fetched_a = movies.iter().find(|m| m.id == a.id).unwrap();
    let fetched_b = movies.iter().find(|m| m.id == b.id).unwrap();

    assert!(fetched_a.is_favorite);
    // Every other field of a, and all of b, are unchanged
    assert_eq!(fetched_a.title, a.title);
    assert_eq!(fetched_a.status, a.status);
    assert_eq!(fetched_b, &b);

    // Toggling again flips back
    assert!(!client.toggle_favorite(a.id).await.unwrap());
}

#[tokio::test]
async fn test_list_applies_status_and_genre_hints() {
    let (_dir, _store, mut client) = test_client();

    client.create(draft("A", "Drama", WatchStatus::Watched)).await.unwrap();
    client.create(draft("B", "Drama", WatchStatus::Watching)).await.unwrap();
    client.create(draft("C", "Sci-Fi", WatchStatus::Watched)).await.unwrap();

    let filter = FilterSpec {
        status: Some(WatchStatus::Watched),
        genre: Some("Drama".to_string()),
        // Search is never applied by the collection client
        search: "no-such-title".to_string(),
    };
    let movies = client.list(&filter).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "A");
}

#[tokio::test]
async fn test_local_stats() {
    let (_dir, _store, mut client) = test_client();

    client.create(draft("A", "Drama", WatchStatus::Watched)).await.unwrap();
    client.create(draft("B", "Drama", WatchStatus::Watched)).await.unwrap();
    client.create(draft("C", "Sci-Fi", WatchStatus::WantToWatch)).await.unwrap();
    let d = client.create(draft("D", "Sci-Fi", WatchStatus::Watching)).await.unwrap();
    client.toggle_favorite(d.id).await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.watched, 2);
    assert_eq!(stats.watching, 1);
    assert_eq!(stats.want_to_watch, 1);
    assert_eq!(stats.favorites, 1);
    assert!(stats.user_info.is_none());
}
