use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::AppState;
use crate::db::UserFilter;
use crate::error::Result;
use crate::models::{NewUser, UserView};

/// Signup payload; fields are optional so missing ones get a 400, not a 422
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// List users
///
/// Used by clients for two lookups:
/// 1. Login (`?email=...&password=...`)
/// 2. Email availability (`?email=...`)
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Json<Vec<UserView>> {
    let users = state.db.list_users(&filter).await;
    Json(users.iter().map(UserView::from).collect())
}

/// Register a new user
///
/// Returns 400 when email, password or role is missing and 409 Conflict when
/// the email is already registered (compared case-insensitively).
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserView>)> {
    let Json(payload) = payload?;
    let new_user = NewUser::from_parts(
        payload.email.as_deref(),
        payload.password.as_deref(),
        payload.role.as_deref(),
    )?;

    let user = state.db.create_user(new_user).await?;
    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}
