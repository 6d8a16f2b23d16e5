//! Recipe quality evaluation.
//!
//! Scores a recipe across completeness, safety, nutrition, and dietary
//! compliance, then folds the sub-scores into a weighted overall score.

use serde::{Deserialize, Serialize};

use super::Recipe;

// Weights of each sub-score in the overall score.
const COMPLETENESS_WEIGHT: f64 = 0.3;
const SAFETY_WEIGHT: f64 = 0.4;
const NUTRITION_WEIGHT: f64 = 0.2;
const DIETARY_COMPLIANCE_WEIGHT: f64 = 0.1;

/// Evaluation results for one recipe. All scores are in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEvaluation {
    pub overall_score: f64,
    pub nutrition_score: f64,
    pub safety_score: f64,
    pub completeness_score: f64,
    pub dietary_compliance_score: f64,
    /// Human-readable notes on problems found.
    pub feedback: Vec<String>,
}

/// Evaluates recipes for quality, accuracy, and safety.
#[derive(Debug, Clone, Default)]
pub struct RecipeEvaluator;

impl RecipeEvaluator {
    /// Creates a new evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a recipe comprehensively.
    pub fn evaluate(&self, recipe: &Recipe) -> RecipeEvaluation {
        let mut feedback = Vec::new();

        let completeness_score = self.evaluate_completeness(recipe, &mut feedback);
        let safety_score = self.evaluate_safety(recipe, &mut feedback);
        let nutrition_score = 0.0;
        let dietary_compliance_score = 0.0;

        let overall_score = completeness_score * COMPLETENESS_WEIGHT
            + safety_score * SAFETY_WEIGHT
            + nutrition_score * NUTRITION_WEIGHT
            + dietary_compliance_score * DIETARY_COMPLIANCE_WEIGHT;

        RecipeEvaluation {
            overall_score,
            nutrition_score,
            safety_score,
            completeness_score,
            dietary_compliance_score,
            feedback,
        }
    }

    /// Scores the presence of required components (title, ingredients,
    /// instructions), naming any missing ones in the feedback.
    fn evaluate_completeness(&self, recipe: &Recipe, feedback: &mut Vec<String>) -> f64 {
        let checks = [
            ("title", !recipe.title.is_empty()),
            ("ingredients", !recipe.ingredients.is_empty()),
            ("instructions", !recipe.instructions.is_empty()),
        ];

        let present = checks.iter().filter(|(_, ok)| *ok).count();
        let score = present as f64 / checks.len() as f64;

        if present < checks.len() {
            let missing: Vec<&str> = checks
                .iter()
                .filter(|(_, ok)| !ok)
                .map(|(field, _)| *field)
                .collect();
            feedback.push(format!("Missing required fields: {}", missing.join(", ")));
        }

        score
    }

    /// Scores the recipe for safety issues.
    ///
    /// TODO: flag dangerous ingredient combinations and unsafe cooking
    /// temperatures; until then every recipe passes.
    fn evaluate_safety(&self, _recipe: &Recipe, _feedback: &mut Vec<String>) -> f64 {
        1.0
    }
}
