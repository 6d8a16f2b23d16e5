//! Recipe generation via an external model service.

use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// Parameters for one recipe generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Recipe description or ingredient list.
    pub query: String,
    /// Dietary restrictions the recipe must respect.
    pub dietary_preferences: Vec<String>,
    /// Cuisine type (e.g. "Italian", "Asian").
    pub cuisine: Option<String>,
    /// Number of servings.
    pub servings: u32,
}

impl RecipeRequest {
    /// Creates a request for four servings with no restrictions.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            dietary_preferences: Vec::new(),
            cuisine: None,
            servings: 4,
        }
    }

    /// Adds dietary restrictions to the request.
    pub fn with_dietary_preferences(
        mut self,
        preferences: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.dietary_preferences
            .extend(preferences.into_iter().map(|p| p.into()));
        self
    }

    /// Sets the cuisine type.
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    /// Sets the serving count.
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }
}

/// A generated recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub servings: u32,
    pub cuisine: Option<String>,
    pub dietary_info: Vec<String>,
}

/// Generates recipes through the OpenRouter model service.
pub struct RecipeGenerator {
    api_key: String,
}

impl RecipeGenerator {
    /// Creates a generator with the given API key, falling back to the
    /// `OPENROUTER_API_KEY` environment variable.
    pub fn new(api_key: Option<String>) -> Result<Self, RecipeError> {
        let api_key = api_key
            .or_else(|| std::env::var("OPENROUTER_API_KEY").ok())
            .ok_or(RecipeError::MissingApiKey)?;
        Ok(Self { api_key })
    }

    /// Returns the API key the generator authenticates with.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Generates a recipe for the given request.
    ///
    /// TODO: wire this to the OpenRouter chat completions endpoint and parse
    /// the model output; until then the call returns a placeholder recipe
    /// echoing the request.
    pub fn generate(&self, request: &RecipeRequest) -> Result<Recipe, RecipeError> {
        Ok(Recipe {
            title: format!("Generated Recipe for {}", request.query),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            servings: request.servings,
            cuisine: request.cuisine.clone(),
            dietary_info: request.dietary_preferences.clone(),
        })
    }
}
