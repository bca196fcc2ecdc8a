//! Logged-in user tracking.
//!
//! The signed-in user's email and role live in an in-memory session store;
//! the browser only carries the session cookie.

use serde::{Deserialize, Serialize};
use tower_sessions::{
    Expiry, MemoryStore, Session, SessionManagerLayer,
    cookie::{SameSite, time::Duration},
};

use crate::config::Config;
use crate::models::{Role, User};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "shop_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

/// Session-stored user identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &Config) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(
            SESSION_EXPIRY_SECONDS,
        )))
        .with_secure(config.is_production())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// The logged-in user, if any.
///
/// Unreadable session data is dropped and treated as logged out.
pub async fn current_user(session: &Session) -> Option<CurrentUser> {
    match session.get::<CurrentUser>(keys::CURRENT_USER).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Discarding unreadable session user: {}", e);
            if let Err(e) = session.remove_value(keys::CURRENT_USER).await {
                tracing::error!("Failed to clear session user: {}", e);
            }
            None
        }
    }
}

/// Helper to store the logged-in user in the session (login).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_USER, user).await
}

/// Helper to clear the logged-in user from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_user(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove_value(keys::CURRENT_USER).await?;
    Ok(())
}
