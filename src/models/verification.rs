//! Verification models matching the backend verification schemas.
//!
//! Verifications are append-only from the client's view; they are never
//! edited or deleted through this API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community verification of a recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct Verification {
    pub id: i64,
    pub recipe_id: i64,
    pub user_id: i64,
    pub rating: f64,
    #[serde(default)]
    pub feedback_text: Option<String>,
    pub success: bool,
    #[serde(default)]
    pub execution_time_minutes: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Request body for submitting a verification. The backend enforces the
/// 1.0–5.0 rating range.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVerificationRequest {
    pub recipe_id: i64,
    pub rating: f64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_minutes: Option<i32>,
}

impl CreateVerificationRequest {
    pub fn new(recipe_id: i64, rating: f64, success: bool) -> Self {
        Self {
            recipe_id,
            rating,
            success,
            feedback_text: None,
            execution_time_minutes: None,
        }
    }
}

/// Verification list with backend-computed aggregates.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationList {
    pub verifications: Vec<Verification>,
    pub total: i64,
    pub avg_rating: f64,
    pub success_rate: f64,
}
