//! Data models for the FoodML Recipe Lab backend.
//!
//! These models match the backend's JSON wire format exactly; all field names
//! are snake_case on the wire, so serde's default naming applies throughout.

mod collection;
mod recipe;
mod user;
mod verification;

pub use collection::*;
pub use recipe::*;
pub use user::*;
pub use verification::*;

use serde::Serialize;

/// Pagination parameters shared by every list endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub page: u32,
    pub page_size: u32,
}

impl Page {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
        }
    }
}
