//! Collection models matching the backend collection schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Recipe;

/// A user-defined named grouping of recipes.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A collection together with its member recipes.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionDetail {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Paginated collection list.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionList {
    pub collections: Vec<Collection>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

/// Request body for creating a collection. The backend applies its default
/// color when none is supplied.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollectionRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateCollectionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            color: None,
        }
    }
}

/// Request body for updating a collection; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Response body for collection membership mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionMutation {
    pub message: String,
    pub collection_id: i64,
    pub recipe_id: i64,
}
