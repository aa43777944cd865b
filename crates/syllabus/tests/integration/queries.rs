//! Collection ordering, lookup, filtering and serialized output.

use syllabus::{Difficulty, ALL_CATEGORIES};

use crate::common::ContentTree;

fn sample() -> ContentTree {
    let tree = ContentTree::new();
    tree.tutorial(
        "Beginner/intro-to-rag.md",
        &["title: Intro to RAG", "date: 2024-01-01", "label: RAG"],
        "",
    )
    .tutorial(
        "Intermediate/chunking.md",
        &["title: Chunking", "date: 2024-06-01", "category: RAG"],
        "",
    )
    .tutorial("Intermediate/drafts.md", &["title: Drafts", "category: Agents"], "")
    .tutorial(
        "Advanced/planners.md",
        &["title: Planners", "Date: March 3, 2024", "category: Agents"],
        "",
    );
    tree
}

#[tokio::test]
async fn test_newest_first_with_undated_last() {
    let tree = sample();

    let slugs: Vec<_> = tree
        .catalog()
        .get_all()
        .await
        .into_iter()
        .map(|r| r.slug)
        .collect();

    assert_eq!(slugs, vec!["chunking", "planners", "intro-to-rag", "drafts"]);
}

#[tokio::test]
async fn test_category_filter() {
    let tree = sample();
    let catalog = tree.catalog();

    let rag: Vec<_> = catalog
        .get_by_category("RAG")
        .await
        .into_iter()
        .map(|r| r.slug)
        .collect();
    assert_eq!(rag, vec!["chunking", "intro-to-rag"]);

    assert_eq!(catalog.get_by_category(ALL_CATEGORIES).await.len(), 4);
    assert!(catalog.get_by_category("Nonexistent").await.is_empty());
}

#[tokio::test]
async fn test_lookup_by_slug() {
    let tree = sample();
    let catalog = tree.catalog();

    let record = catalog.get_by_slug("planners").await.unwrap();
    assert_eq!(record.title, "Planners");
    assert_eq!(record.difficulty_level, Difficulty::Advanced);

    assert!(catalog.get_by_slug("Planners").await.is_none());
    assert!(catalog.get_by_slug("unknown").await.is_none());
}

#[tokio::test]
async fn test_collection_views() {
    let tree = sample();
    let loaded = tree.catalog().load().await;

    assert_eq!(loaded.collection.categories(), vec!["Agents", "RAG"]);
    assert_eq!(
        loaded
            .collection
            .by_difficulty(Difficulty::Intermediate)
            .len(),
        2
    );
}

#[tokio::test]
async fn test_records_serialize_with_display_field_names() {
    let tree = ContentTree::new();
    tree.tutorial(
        "Beginner/intro.md",
        &[
            "Title: Intro",
            "Keywords: rag, llm",
            "Estimated Time: 45 min",
            "Last Updated: 2024-07-01",
        ],
        "Body",
    );

    let records = tree.catalog().get_all().await;
    let json = serde_json::to_value(&records).unwrap();
    let record = &json[0];

    assert_eq!(record["slug"], "intro");
    assert_eq!(record["title"], "Intro");
    assert_eq!(record["keywords"], serde_json::json!(["rag", "llm"]));
    assert_eq!(record["difficultyLevel"], "Beginner");
    assert_eq!(record["estimatedTime"], "45 min");
    assert_eq!(record["lastUpdated"], "2024-07-01");
    assert_eq!(record["content"], "Body");
    assert_eq!(record.as_object().unwrap().len(), 13);
}
