//! Session credential storage.
//!
//! The bearer token is the only shared mutable state in the client. It is
//! held behind the [`TokenStore`] trait so the embedding application can
//! supply durable storage, and so tests can observe the credential lifecycle
//! directly. Reaction to session expiry (typically navigation to a login
//! entry point) is a callback owned by the application, not the client.

use std::sync::RwLock;

/// Storage for the opaque session credential.
///
/// The token is read before every request and written only by login,
/// logout, and the 401 handler.
pub trait TokenStore: Send + Sync {
    /// Get the stored token, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored token.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Callback invoked when the session is torn down (a 401 was observed, or
/// an explicit logout requested navigation).
pub type SessionHook = Box<dyn Fn() + Send + Sync>;

/// In-memory token store. The default for ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}
