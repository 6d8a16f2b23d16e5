//! Integration tests for the full extraction pipeline.
//!
//! Builds the corpus from the builtin catalog, exports it to disk, and
//! verifies the serialized document shape against its consumers' contract.

use std::fs;

use bias_forge::catalog::TemplateCatalog;
use bias_forge::corpus::{build_corpus, SyntheticCorpus};
use bias_forge::export::CorpusExporter;
use tempfile::TempDir;

fn builtin_corpus() -> SyntheticCorpus {
    build_corpus(TemplateCatalog::builtin()).expect("builtin catalog should expand")
}

#[test]
fn test_full_pipeline_round_trip() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("corpus.json");

    let corpus = builtin_corpus();
    let result = CorpusExporter::new(&path)
        .export(&corpus)
        .expect("should export");

    assert_eq!(result.example_count, 1233);
    assert_eq!(result.path, path);

    let content = fs::read_to_string(&path).expect("should read file");
    let parsed: SyntheticCorpus = serde_json::from_str(&content).expect("should parse");

    assert_eq!(parsed, corpus);
}

#[test]
fn test_document_field_names() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let path = temp_dir.path().join("corpus.json");

    CorpusExporter::new(&path)
        .export(&builtin_corpus())
        .expect("should export");

    let content = fs::read_to_string(&path).expect("should read file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("should parse");

    let document = value.as_object().expect("document should be an object");
    for field in [
        "pronoun_examples",
        "disclosure_examples",
        "stereotype_examples",
        "sentiment_examples",
        "total_examples",
        "metadata",
    ] {
        assert!(document.contains_key(field), "missing field '{}'", field);
    }

    assert_eq!(value["total_examples"], 1233);
    assert_eq!(value["metadata"]["source"], "trans-evals repository");
    assert_eq!(value["metadata"]["extraction_method"], "template_generation");
    assert_eq!(
        value["metadata"]["categories"],
        serde_json::json!(["pronoun", "disclosure", "stereotype", "sentiment"])
    );

    let first = &value["pronoun_examples"][0];
    let entry = first.as_object().expect("example should be an object");
    for field in [
        "prompt",
        "variables",
        "bias_type",
        "evaluation_type",
        "test_type",
    ] {
        assert!(entry.contains_key(field), "missing example field '{}'", field);
    }
    assert_eq!(first["bias_type"], "misgendering");
    assert_eq!(first["evaluation_type"], "generation");
    assert_eq!(first["test_type"], "pronoun_consistency");
    assert_eq!(first["variables"]["name"], "Alex");
}

#[test]
fn test_two_runs_are_bit_identical() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let first_path = temp_dir.path().join("first.json");
    let second_path = temp_dir.path().join("second.json");

    CorpusExporter::new(&first_path)
        .export(&builtin_corpus())
        .expect("should export");
    CorpusExporter::new(&second_path)
        .export(&builtin_corpus())
        .expect("should export");

    let first = fs::read(&first_path).expect("should read first run");
    let second = fs::read(&second_path).expect("should read second run");
    assert_eq!(first, second);
}

#[test]
fn test_category_counts_match_catalog_combinations() {
    let catalog = TemplateCatalog::builtin();
    let corpus = builtin_corpus();

    for (category, templates) in catalog.iter() {
        let expected: usize = templates.iter().map(|t| t.combination_count()).sum();
        assert_eq!(
            corpus.examples_for_category(category).len(),
            expected,
            "count mismatch for {}",
            category.name()
        );
    }
}
