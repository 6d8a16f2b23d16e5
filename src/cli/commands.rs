//! CLI command definitions for bias-forge.
//!
//! This module provides the command-line interface for expanding the builtin
//! template catalog into a synthetic corpus and working with the outputs.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::catalog::TemplateCatalog;
use crate::corpus::build_corpus;
use crate::export::{render_summary, CorpusExporter};
use crate::recipes::{Recipe, RecipeBot, RecipeEvaluator, RecipeRequest};

/// Default output path for the extracted corpus.
const DEFAULT_OUTPUT: &str = "trans_evals_synthetic_data.json";

/// Bias evaluation prompt corpus generator.
#[derive(Parser)]
#[command(name = "bias-forge")]
#[command(about = "Generate bias evaluation prompt corpora from templates")]
#[command(version)]
#[command(
    long_about = "bias-forge expands a fixed catalog of parameterized bias probe templates into a complete synthetic corpus, grouped by category.\n\nExample usage:\n  bias-forge extract --output ./corpus.json"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Expand the builtin catalog and write the corpus to disk.
    #[command(alias = "gen")]
    Extract(ExtractArgs),

    /// Show the builtin catalog: templates and example counts per category.
    Catalog,

    /// Generate a recipe through the recipe service and print it as JSON.
    Recipe(RecipeArgs),

    /// Evaluate a recipe JSON document and print the scores.
    #[command(alias = "eval")]
    Evaluate(EvaluateArgs),
}

/// Arguments for `bias-forge extract`.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Output path for the corpus JSON document.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Write compact JSON instead of pretty-printed.
    #[arg(long)]
    pub compact: bool,

    /// Skip printing the corpus summary.
    #[arg(long)]
    pub quiet: bool,
}

/// Arguments for `bias-forge recipe`.
#[derive(Parser, Debug)]
pub struct RecipeArgs {
    /// Recipe description or ingredient list.
    pub query: String,

    /// Dietary restriction the recipe must respect (repeatable).
    #[arg(long = "dietary")]
    pub dietary_preferences: Vec<String>,

    /// Cuisine type (e.g. "Italian", "Asian").
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Number of servings.
    #[arg(long, default_value = "4")]
    pub servings: u32,

    /// OpenRouter API key (can also be set via OPENROUTER_API_KEY env var).
    #[arg(long, env = "OPENROUTER_API_KEY")]
    pub api_key: Option<String>,
}

/// Arguments for `bias-forge evaluate`.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Path to the recipe JSON file to evaluate.
    pub recipe: PathBuf,
}

/// Parses command-line arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Runs the command selected by the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Catalog => run_catalog(),
        Commands::Recipe(args) => run_recipe(args),
        Commands::Evaluate(args) => run_evaluate(args),
    }
}

fn run_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let catalog = TemplateCatalog::builtin();
    info!(templates = catalog.template_count(), "expanding catalog");

    let corpus = build_corpus(catalog)?;
    let result = CorpusExporter::new(&args.output)
        .with_pretty(!args.compact)
        .export(&corpus)?;

    info!(
        path = %result.path.display(),
        examples = result.example_count,
        "extraction complete"
    );
    if !args.quiet {
        println!("{}", render_summary(&corpus));
    }
    Ok(())
}

fn run_catalog() -> anyhow::Result<()> {
    let catalog = TemplateCatalog::builtin();

    for (category, templates) in catalog.iter() {
        let examples: usize = templates.iter().map(|t| t.combination_count()).sum();
        println!(
            "{}: {} templates, {} examples",
            category.display_name(),
            templates.len(),
            examples
        );
        for template in templates {
            println!(
                "  {} ({} examples): {}",
                template.test_type,
                template.combination_count(),
                template.pattern
            );
        }
    }
    Ok(())
}

fn run_recipe(args: RecipeArgs) -> anyhow::Result<()> {
    let bot = RecipeBot::new(args.api_key)?;

    let mut request = RecipeRequest::new(args.query)
        .with_dietary_preferences(args.dietary_preferences)
        .with_servings(args.servings);
    if let Some(cuisine) = args.cuisine {
        request = request.with_cuisine(cuisine);
    }

    let recipe = bot.generate_recipe(&request)?;
    println!("{}", serde_json::to_string_pretty(&recipe)?);
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.recipe)?;
    let recipe: Recipe = serde_json::from_str(&content)?;

    let evaluation = RecipeEvaluator::new().evaluate(&recipe);
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}
