//! Offline snapshot file tests

mod common;

use common::{print_test_header, sample_tales};
use std::sync::Arc;
use tales_service::contract::{BrowseRequest, BrowseView, TaleQuery};
use tales_service::domain::{BrowsePagers, Connectivity, NoOpContactRelay, Service, TaleRepository};
use tales_service::infra::storage::{write_snapshot, SnapshotError, SnapshotTaleRepository};

#[tokio::test]
async fn test_written_snapshot_is_served_with_filters() {
    print_test_header(
        "test_written_snapshot_is_served_with_filters",
        &["Exported rows read back through the same filter semantics"],
    );
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("offlineTales.json");
    let tales: Vec<_> = sample_tales().into_iter().take(6).collect();

    write_snapshot(&path, &tales).unwrap();
    let repo = SnapshotTaleRepository::new(&path);

    assert_eq!(repo.load().await.unwrap(), tales);

    let japan = repo
        .find(&TaleQuery::new(6).with_nation(Some("Japan")))
        .await
        .unwrap();
    assert_eq!(japan.iter().map(|t| t.id).collect::<Vec<_>>(), vec![4, 6]);

    let limited = repo.find(&TaleQuery::new(2)).await.unwrap();
    assert_eq!(limited.len(), 2);

    assert_eq!(repo.find_by_id(5).await.unwrap().unwrap().title, "The Magic Paintbrush");
    assert!(repo.find_by_id(50).await.unwrap().is_none());
}

#[tokio::test]
async fn test_snapshot_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offlineTales.json");
    write_snapshot(&path, &sample_tales()[..1]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(text.ends_with("]\n"));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["nation"], "Nigeria");
}

#[tokio::test]
async fn test_rewrite_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offlineTales.json");
    let repo = SnapshotTaleRepository::new(&path);

    write_snapshot(&path, &sample_tales()).unwrap();
    assert_eq!(repo.load().await.unwrap().len(), 14);

    write_snapshot(&path, &sample_tales()[..3]).unwrap();
    assert_eq!(repo.load().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_and_malformed_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    let missing = SnapshotTaleRepository::new(dir.path().join("absent.json"));
    assert!(matches!(
        missing.load().await.unwrap_err(),
        SnapshotError::Missing { .. }
    ));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let broken = SnapshotTaleRepository::new(&path);
    assert!(matches!(
        broken.load().await.unwrap_err(),
        SnapshotError::Malformed { .. }
    ));
}

#[tokio::test]
async fn test_offline_without_snapshot_renders_empty_page() {
    print_test_header(
        "test_offline_without_snapshot_renders_empty_page",
        &["No exported snapshot means an empty offline page, not an error"],
    );
    let dir = tempfile::tempdir().unwrap();
    let snapshot = Arc::new(SnapshotTaleRepository::new(dir.path().join("absent.json")));
    let service = Service::new(
        snapshot.clone(),
        snapshot,
        Arc::new(NoOpContactRelay),
        Arc::new(Connectivity::pinned(false)),
        BrowsePagers::default(),
    );

    let page = service
        .browse(BrowseView::Home, BrowseRequest::default())
        .await
        .unwrap();

    assert!(page.is_offline());
    assert!(page.tales.is_empty());
    assert!(!page.has_more);
}
