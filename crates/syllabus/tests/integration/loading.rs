//! Loading behavior: discovery, parsing, and failure isolation.

use syllabus::{Difficulty, IssueKind};

use crate::common::ContentTree;

#[tokio::test]
async fn test_slug_and_level_from_location() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/intro-to-rag.md", &["title: Intro to RAG"], "Body\n");

    let records = tree.catalog().get_all().await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, "intro-to-rag");
    assert_eq!(records[0].difficulty_level, Difficulty::Beginner);
    assert_eq!(records[0].content, "Body\n");
}

#[tokio::test]
async fn test_corrupt_file_is_isolated() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/good.md", &["title: Good"], "")
        .tutorial("Beginner/broken.md", &["title: [never closed"], "")
        .file("Advanced/binary.md", [0xc3, 0x28, 0xff]);

    let loaded = tree.catalog().load().await;

    assert_eq!(loaded.collection.len(), 1);
    assert_eq!(loaded.collection.all()[0].slug, "good");
    assert_eq!(loaded.report.files_scanned, 3);
    assert_eq!(loaded.report.records_loaded, 1);

    let broken = tree.root().join("Beginner/broken.md");
    assert!(loaded
        .report
        .issues_for(&broken)
        .any(|i| matches!(i.kind, IssueKind::InvalidHeader { .. })));

    let binary = tree.root().join("Advanced/binary.md");
    assert!(loaded
        .report
        .issues_for(&binary)
        .any(|i| matches!(i.kind, IssueKind::UnreadableFile { .. })));
}

#[tokio::test]
async fn test_colon_values_are_repaired() {
    let tree = ContentTree::new();
    tree.tutorial(
        "Intermediate/agents.md",
        &[
            "Title: Agents: A Field Guide",
            "Description: Tools: when and why",
            "Estimated Time: 1:30",
        ],
        "# Agents\n",
    );

    let loaded = tree.catalog().load().await;
    let record = loaded.collection.get("agents").unwrap();

    assert!(loaded.report.is_clean());
    assert_eq!(record.title, "Agents: A Field Guide");
    assert_eq!(record.description, "Tools: when and why");
    assert_eq!(record.estimated_time, "1:30");
}

#[tokio::test]
async fn test_file_without_header_gets_defaults() {
    let tree = ContentTree::new();
    tree.file("Advanced/plain.md", "# Plain\n\nNo header here.\n");

    let record = tree.catalog().get_by_slug("plain").await.unwrap();

    assert_eq!(record.title, "Untitled");
    assert_eq!(record.author, "Anonymous");
    assert_eq!(record.category, "General");
    assert_eq!(record.estimated_time, "30 min");
    assert_eq!(record.difficulty_level, Difficulty::Advanced);
    assert_eq!(record.content, "# Plain\n\nNo header here.\n");
}

#[tokio::test]
async fn test_crlf_line_endings() {
    let tree = ContentTree::new();
    tree.file(
        "Beginner/windows.md",
        "---\r\ntitle: Saved: on Windows\r\nkeywords: a, b\r\n---\r\nBody\r\n",
    );

    let loaded = tree.catalog().load().await;
    let record = loaded.collection.get("windows").unwrap();

    assert!(loaded.report.is_clean());
    assert_eq!(record.title, "Saved: on Windows");
    assert_eq!(record.keywords, vec!["a", "b"]);
    assert_eq!(record.content, "Body\r\n");
}

#[tokio::test]
async fn test_byte_order_mark_and_partial_quotes() {
    let tree = ContentTree::new();
    tree.file(
        "Beginner/bom.md",
        "\u{feff}---\ntitle: Saved with BOM\nlabel: RAG\n---\nBody\n",
    )
    .file(
        "Beginner/quoted.md",
        "---\ntitle: \"Intro\": Getting Started\nauthor: Dana\n---\nBody\n",
    );

    let loaded = tree.catalog().load().await;

    assert!(loaded.report.is_clean());
    let bom = loaded.collection.get("bom").unwrap();
    assert_eq!(bom.title, "Saved with BOM");
    assert_eq!(bom.category, "RAG");
    assert_eq!(bom.content, "Body\n");

    let quoted = loaded.collection.get("quoted").unwrap();
    assert_eq!(quoted.title, "\"Intro\": Getting Started");
    assert_eq!(quoted.author, "Dana");
}

#[tokio::test]
async fn test_explicit_difficulty_overrides_directory() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/deep.md", &["Difficulty Level: Advanced"], "")
        .tutorial("Beginner/odd.md", &["Difficulty Level: Wizard"], "");

    let loaded = tree.catalog().load().await;

    assert_eq!(
        loaded.collection.get("deep").unwrap().difficulty_level,
        Difficulty::Advanced
    );
    assert_eq!(
        loaded.collection.get("odd").unwrap().difficulty_level,
        Difficulty::Beginner
    );
}

#[tokio::test]
async fn test_missing_level_directories_are_reported() {
    let tree = ContentTree::bare();
    tree.tutorial("Intermediate/only.md", &["title: Only"], "");

    let loaded = tree.catalog().load().await;

    assert_eq!(loaded.collection.len(), 1);
    let missing: Vec<_> = loaded
        .report
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::MissingDirectory)
        .map(|i| i.path.clone())
        .collect();
    assert_eq!(
        missing,
        vec![tree.root().join("Beginner"), tree.root().join("Advanced")]
    );
    assert_eq!(loaded.report.files_skipped(), 0);
}

#[tokio::test]
async fn test_empty_root_yields_empty_collection() {
    let tree = ContentTree::bare();

    let loaded = tree.catalog().load().await;

    assert!(loaded.collection.is_empty());
    assert_eq!(loaded.report.issues.len(), 3);
}

#[tokio::test]
async fn test_only_direct_children_with_extension() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/top.md", &["title: Top"], "")
        .tutorial("Beginner/archive/old.md", &["title: Old"], "")
        .file("Beginner/notes.txt", "not content")
        .file("stray.md", "---\ntitle: Stray\n---\n");

    let records = tree.catalog().get_all().await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, "top");
}

#[tokio::test]
async fn test_duplicate_slug_keeps_first_level() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/rag.md", &["title: Beginner RAG"], "")
        .tutorial("Intermediate/rag.md", &["title: Intermediate RAG"], "");

    let loaded = tree.catalog().load().await;

    assert_eq!(loaded.collection.len(), 1);
    assert_eq!(loaded.collection.get("rag").unwrap().title, "Beginner RAG");
    assert_eq!(loaded.report.files_skipped(), 1);
}

#[tokio::test]
async fn test_custom_extensions() {
    let tree = ContentTree::new();
    tree.tutorial("Beginner/a.markdown", &["title: A"], "")
        .tutorial("Beginner/b.md", &["title: B"], "");

    let config = syllabus::CatalogConfig::new(tree.root()).with_extensions(["markdown"]);
    let records = syllabus::ContentCatalog::new(config)
        .unwrap()
        .get_all()
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].slug, "a");
}
