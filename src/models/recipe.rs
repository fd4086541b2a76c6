//! Recipe models matching the backend recipe schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recipe ingredient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A single numbered instruction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionStep {
    pub step: i32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_minutes: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// An AI-generated recipe. Immutable from the client's perspective except for
/// the favorited flag, which is toggled via a dedicated operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    #[serde(default)]
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub cook_time_minutes: Option<i32>,
    pub servings: i32,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub equipment_needed: Vec<String>,
    #[serde(default)]
    pub chef_notes: Option<String>,
    pub ai_prompt: String,
    #[serde(default)]
    pub verified_count: i64,
    #[serde(default)]
    pub avg_rating: f64,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_favorited: bool,
}

/// Request body for generating a new recipe.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRecipeRequest {
    pub prompt: String,
    pub dietary_restrictions: Vec<String>,
    pub servings: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_type: Option<String>,
}

impl GenerateRecipeRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            dietary_restrictions: Vec::new(),
            servings: 4,
            cuisine_type: None,
        }
    }
}

/// Paginated recipe list.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

/// Response body for the favorite toggle operation.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteToggle {
    pub recipe_id: i64,
    pub is_favorited: bool,
    pub message: String,
}

/// Search filters. Filters left as `None` are omitted from the query string
/// entirely; a default `SearchFilters` sends only pagination parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl SearchFilters {
    pub fn query(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }
}
