//! FoodML Recipe Lab client
//!
//! A typed async client for the FoodML REST backend: authentication,
//! AI recipe generation, browsing/search/favorites, community verifications,
//! and recipe collections.
//!
//! The client attaches the session bearer credential to every request and
//! tears the session down on the first 401 it observes (clear credential,
//! invoke the session-expired hook, propagate the error). See [`ApiClient`].

mod client;
mod config;
mod errors;
mod models;
mod session;

pub use client::ApiClient;
pub use config::Config;
pub use errors::{ApiError, ApiResult};
pub use models::*;
pub use session::{MemoryTokenStore, SessionHook, TokenStore};
