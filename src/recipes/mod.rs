//! Recipe generation and evaluation.
//!
//! An external collaborator of the corpus engine: recipes are produced by an
//! opaque generation service (stubbed until the network integration lands)
//! and scored by a weighted-heuristic evaluator. The corpus pipeline never
//! depends on this module.

mod evaluator;
mod generator;

pub use evaluator::{RecipeEvaluation, RecipeEvaluator};
pub use generator::{Recipe, RecipeGenerator, RecipeRequest};

use crate::error::RecipeError;

/// Facade tying recipe generation and evaluation together.
pub struct RecipeBot {
    generator: RecipeGenerator,
    evaluator: RecipeEvaluator,
}

impl RecipeBot {
    /// Creates a bot with the given API key, falling back to the
    /// `OPENROUTER_API_KEY` environment variable.
    pub fn new(api_key: Option<String>) -> Result<Self, RecipeError> {
        Ok(Self {
            generator: RecipeGenerator::new(api_key)?,
            evaluator: RecipeEvaluator::new(),
        })
    }

    /// Generates a recipe for the given request.
    pub fn generate_recipe(&self, request: &RecipeRequest) -> Result<Recipe, RecipeError> {
        self.generator.generate(request)
    }

    /// Evaluates a recipe for quality and completeness.
    pub fn evaluate_recipe(&self, recipe: &Recipe) -> RecipeEvaluation {
        self.evaluator.evaluate(recipe)
    }
}
