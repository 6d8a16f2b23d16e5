//! Corpus export functionality.
//!
//! Provides the JSON exporter for writing a `SyntheticCorpus` to disk and a
//! human-readable summary renderer with per-category counts and sample
//! prompts.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::catalog::TemplateCategory;
use crate::corpus::SyntheticCorpus;
use crate::error::ExportError;

/// Result of a corpus export operation.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Path of the written JSON document.
    pub path: PathBuf,
    /// Number of examples exported.
    pub example_count: usize,
    /// Category distribution (category name -> count).
    pub category_distribution: HashMap<String, usize>,
    /// Export timestamp.
    pub exported_at: DateTime<Utc>,
}

/// Exporter for writing a corpus as a JSON document.
///
/// # Example
///
/// ```ignore
/// use bias_forge::catalog::TemplateCatalog;
/// use bias_forge::corpus::build_corpus;
/// use bias_forge::export::CorpusExporter;
///
/// let corpus = build_corpus(TemplateCatalog::builtin())?;
/// let result = CorpusExporter::new("corpus.json").export(&corpus)?;
/// println!("wrote {} examples", result.example_count);
/// ```
pub struct CorpusExporter {
    /// Path the JSON document is written to.
    output_path: PathBuf,
    /// Whether to pretty-print the JSON output.
    pretty: bool,
}

impl CorpusExporter {
    /// Creates a new exporter targeting the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            pretty: true,
        }
    }

    /// Sets whether the JSON output is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes the corpus to the output path.
    ///
    /// Parent directories are created as needed. An empty corpus is refused.
    pub fn export(&self, corpus: &SyntheticCorpus) -> Result<ExportResult, ExportError> {
        if corpus.is_empty() {
            return Err(ExportError::NoExamples);
        }

        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, corpus)?;
        } else {
            serde_json::to_writer(&mut writer, corpus)?;
        }
        writer.flush()?;

        let category_distribution = corpus
            .category_counts()
            .into_iter()
            .map(|(category, count)| (category.name().to_string(), count))
            .collect();

        info!(
            path = %self.output_path.display(),
            examples = corpus.total_examples,
            "corpus exported"
        );

        Ok(ExportResult {
            path: self.output_path.clone(),
            example_count: corpus.total_examples,
            category_distribution,
            exported_at: Utc::now(),
        })
    }
}

/// Number of sample prompts shown per category in the summary.
fn sample_limit(category: TemplateCategory) -> usize {
    match category {
        TemplateCategory::Pronoun => 3,
        _ => 2,
    }
}

/// Renders a human-readable summary: total, per-category counts, and the
/// first few prompts of each category.
pub fn render_summary(corpus: &SyntheticCorpus) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Extracted {} synthetic examples",
        corpus.total_examples
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Breakdown by category:");
    for (category, count) in corpus.category_counts() {
        let _ = writeln!(out, "  - {} examples: {}", category.display_name(), count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Sample examples from each category:");
    for category in TemplateCategory::all() {
        let examples = corpus.examples_for_category(category);
        if examples.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{} examples:", category.display_name());
        for (i, example) in examples.iter().take(sample_limit(category)).enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, example.prompt);
        }
    }

    out
}
