//! Authenticated API client for the FoodML backend.
//!
//! Centralizes request construction against `{api_url}/api`, transparently
//! attaches the session credential as a bearer header, and reacts to
//! authentication expiry by tearing the session down before propagating the
//! rejected call's error. Each call is independent and at-most-once: no
//! retries, no backoff, no request queuing.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::{ApiError, ApiResult};
use crate::models::{
    Collection, CollectionDetail, CollectionList, CollectionMutation, CreateCollectionRequest,
    CreateVerificationRequest, Credentials, FavoriteToggle, GenerateRecipeRequest, Page, Recipe,
    RecipeList, SearchFilters, Session, UpdateCollectionRequest, User, Verification,
    VerificationList,
};
use crate::session::{MemoryTokenStore, SessionHook, TokenStore};

/// Typed client for the FoodML REST backend.
///
/// The session lifecycle is a two-state machine: anonymous (no credential)
/// and authenticated (credential stored, unvalidated until the next call).
/// Login and register move to authenticated; logout and any 401 response
/// move back to anonymous.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    on_session_expired: Option<SessionHook>,
}

impl ApiClient {
    /// Create a client with an in-memory token store.
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Create a client with an injected token store.
    pub fn with_store(config: &Config, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/api", config.api_url.trim_end_matches('/')),
            tokens,
            on_session_expired: None,
        }
    }

    /// Register a callback invoked when the session is torn down (a 401 was
    /// observed, or logout requested navigation). The embedding application
    /// decides the concrete action, typically navigating to its login page.
    pub fn on_session_expired(mut self, hook: SessionHook) -> Self {
        self.on_session_expired = Some(hook);
        self
    }

    /// True iff a non-empty session credential is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some_and(|t| !t.is_empty())
    }

    /// Clear the session credential. With `redirect`, also invoke the
    /// session-expired hook so the application can navigate away.
    pub fn logout(&self, redirect: bool) {
        self.tokens.clear();
        tracing::debug!("Session credential cleared (logout)");
        if redirect {
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
        }
    }

    // --- Auth ---

    /// POST /auth/login - Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<Session> {
        let session: Session = self
            .send(self.request(Method::POST, "/auth/login").json(credentials))
            .await?;
        self.tokens.set(&session.access_token);
        Ok(session)
    }

    /// POST /auth/register - Create an account and start a session.
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<Session> {
        let session: Session = self
            .send(self.request(Method::POST, "/auth/register").json(credentials))
            .await?;
        self.tokens.set(&session.access_token);
        Ok(session)
    }

    /// GET /auth/me - Fetch the authenticated user.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.send(self.request(Method::GET, "/auth/me")).await
    }

    // --- Recipes ---

    /// POST /recipes/generate - Request an AI-generated recipe.
    pub async fn generate_recipe(&self, request: &GenerateRecipeRequest) -> ApiResult<Recipe> {
        self.send(self.request(Method::POST, "/recipes/generate").json(request))
            .await
    }

    /// GET /recipes/:id - Get a single recipe.
    pub async fn recipe(&self, recipe_id: i64) -> ApiResult<Recipe> {
        self.send(self.request(Method::GET, &format!("/recipes/{}", recipe_id)))
            .await
    }

    /// GET /recipes - List the authenticated user's recipes.
    pub async fn my_recipes(&self, page: Page) -> ApiResult<RecipeList> {
        self.send(self.request(Method::GET, "/recipes").query(&page))
            .await
    }

    /// GET /recipes/favorites/list - List the user's favorited recipes.
    pub async fn favorite_recipes(&self, page: Page) -> ApiResult<RecipeList> {
        self.send(
            self.request(Method::GET, "/recipes/favorites/list")
                .query(&page),
        )
        .await
    }

    /// GET /recipes/search/results - Search recipes. Filters left unset in
    /// `filters` are omitted from the query string entirely.
    pub async fn search_recipes(&self, filters: &SearchFilters, page: Page) -> ApiResult<RecipeList> {
        self.send(
            self.request(Method::GET, "/recipes/search/results")
                .query(filters)
                .query(&page),
        )
        .await
    }

    /// GET /recipes/trending/top - Backend-ranked trending recipes.
    pub async fn trending_recipes(&self, min_verifications: u32, page: Page) -> ApiResult<RecipeList> {
        self.send(
            self.request(Method::GET, "/recipes/trending/top")
                .query(&[("min_verifications", min_verifications)])
                .query(&page),
        )
        .await
    }

    /// POST /recipes/:id/favorite - Toggle the favorited flag for a recipe.
    pub async fn toggle_favorite(&self, recipe_id: i64) -> ApiResult<FavoriteToggle> {
        self.send(self.request(Method::POST, &format!("/recipes/{}/favorite", recipe_id)))
            .await
    }

    // --- Verifications ---

    /// GET /verifications/recipe/:id - List verifications for a recipe,
    /// with backend-computed aggregates.
    pub async fn recipe_verifications(&self, recipe_id: i64, page: Page) -> ApiResult<VerificationList> {
        self.send(
            self.request(Method::GET, &format!("/verifications/recipe/{}", recipe_id))
                .query(&page),
        )
        .await
    }

    /// POST /verifications/ - Submit a verification for a recipe.
    pub async fn create_verification(
        &self,
        request: &CreateVerificationRequest,
    ) -> ApiResult<Verification> {
        // The backend mounts this route with a trailing slash
        self.send(self.request(Method::POST, "/verifications/").json(request))
            .await
    }

    /// GET /verifications/my-verifications - List the authenticated user's
    /// own verifications.
    pub async fn my_verifications(&self) -> ApiResult<Vec<Verification>> {
        self.send(self.request(Method::GET, "/verifications/my-verifications"))
            .await
    }

    // --- Collections ---

    /// GET /collections - List the user's collections.
    pub async fn collections(&self, page: Page) -> ApiResult<CollectionList> {
        self.send(self.request(Method::GET, "/collections").query(&page))
            .await
    }

    /// POST /collections - Create a collection.
    pub async fn create_collection(&self, request: &CreateCollectionRequest) -> ApiResult<Collection> {
        self.send(self.request(Method::POST, "/collections").json(request))
            .await
    }

    /// GET /collections/:id - Get a collection with its member recipes.
    pub async fn collection(&self, collection_id: i64, page: Page) -> ApiResult<CollectionDetail> {
        self.send(
            self.request(Method::GET, &format!("/collections/{}", collection_id))
                .query(&page),
        )
        .await
    }

    /// PUT /collections/:id - Update a collection's name/description/color.
    pub async fn update_collection(
        &self,
        collection_id: i64,
        request: &UpdateCollectionRequest,
    ) -> ApiResult<Collection> {
        self.send(
            self.request(Method::PUT, &format!("/collections/{}", collection_id))
                .json(request),
        )
        .await
    }

    /// DELETE /collections/:id - Delete a collection. The backend responds
    /// with 204 and no body.
    pub async fn delete_collection(&self, collection_id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/collections/{}", collection_id))
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// POST /collections/:id/recipes - Add a recipe to a collection.
    pub async fn add_recipe_to_collection(
        &self,
        collection_id: i64,
        recipe_id: i64,
    ) -> ApiResult<CollectionMutation> {
        self.send(
            self.request(Method::POST, &format!("/collections/{}/recipes", collection_id))
                .json(&serde_json::json!({ "recipe_id": recipe_id })),
        )
        .await
    }

    /// DELETE /collections/:id/recipes/:recipe_id - Remove a recipe from a
    /// collection.
    pub async fn remove_recipe_from_collection(
        &self,
        collection_id: i64,
        recipe_id: i64,
    ) -> ApiResult<CollectionMutation> {
        self.send(self.request(
            Method::DELETE,
            &format!("/collections/{}/recipes/{}", collection_id, recipe_id),
        ))
        .await
    }

    // --- Request plumbing ---

    /// Build a request for `path` under the `/api` prefix, attaching the
    /// bearer credential if one is stored.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}{}", method, self.base_url, path);
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.tokens.get() {
            if !token.is_empty() {
                builder = builder.bearer_auth(token);
            }
        }
        builder
    }

    /// Send a request and decode a JSON response body.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await?;
        let response = self.check(response).await?;
        Ok(response.json().await?)
    }

    /// Map a non-2xx response to an error, performing the 401 session
    /// teardown side effect first. Runs exactly once per response.
    async fn check(&self, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            let detail = backend_detail(response).await;
            tracing::warn!("Session rejected by backend: {}", detail);
            self.tokens.clear();
            if let Some(hook) = &self.on_session_expired {
                hook();
            }
            return Err(ApiError::Unauthorized(detail));
        }
        if !status.is_success() {
            let detail = backend_detail(response).await;
            return Err(ApiError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response)
    }
}

/// Extract the backend's human-readable `detail` message from an error
/// response, falling back to the raw body or the status reason.
async fn backend_detail(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }
    if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        body
    }
}
