//! Cached catalog reload behavior.

use std::sync::Arc;

use crate::common::ContentTree;

#[tokio::test]
async fn test_cache_sees_added_and_removed_files() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/a.md", &["title: A"], "");
    let cache = tree.cached();

    assert_eq!(cache.get_all().await.len(), 1);

    tree.tutorial("Advanced/b.md", &["title: B"], "");
    assert_eq!(cache.get_all().await.len(), 2);

    std::fs::remove_file(tree.root().join("Beginner/a.md")).unwrap();
    let records = cache.get_all().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, "b");
}

#[tokio::test]
async fn test_cache_ignores_unrelated_files() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/a.md", &["title: A"], "");
    let cache = tree.cached();

    let first = cache.load().await;
    tree.file("Beginner/scratch.txt", "notes");
    let second = cache.load().await;

    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_cache_concurrent_callers_share_result() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/a.md", &["title: A"], "");
    let cache = Arc::new(tree.cached());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.load().await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
}
