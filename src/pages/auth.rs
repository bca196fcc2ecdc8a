//! Login, signup and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use super::views::Navbar;
use crate::AppState;
use crate::constants::ERR_INVALID_CREDENTIALS;
use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::session::{CurrentUser, clear_current_user, current_user, set_current_user};

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Query parameters shown on the login page after a signup.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub signed_up: Option<bool>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub nav: Navbar,
    pub email: String,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub nav: Navbar,
    pub email: String,
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(session: Session, Query(query): Query<LoginQuery>) -> impl IntoResponse {
    LoginTemplate {
        nav: Navbar::new(current_user(&session).await),
        email: String::new(),
        error: None,
        success: query
            .signed_up
            .filter(|signed_up| *signed_up)
            .map(|_| "Signup complete! You can log in now.".to_string()),
    }
}

/// Handle login form submission.
///
/// Stores the user's email and role in the session and goes back home.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let Some(user) = state.db.authenticate(&form.email, &form.password).await else {
        tracing::info!("Failed login attempt for {}", form.email);
        let page = LoginTemplate {
            nav: Navbar::new(current_user(&session).await),
            email: form.email,
            error: Some(ERR_INVALID_CREDENTIALS.to_string()),
            success: None,
        };
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    };

    set_current_user(&session, &CurrentUser::from(&user)).await?;
    tracing::info!("User {} logged in as {}", user.id, user.role);

    Ok(Redirect::to("/").into_response())
}

/// Handle logout.
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    Ok(Redirect::to("/"))
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
pub async fn signup_page(session: Session) -> impl IntoResponse {
    SignupTemplate {
        nav: Navbar::new(current_user(&session).await),
        email: String::new(),
        error: None,
    }
}

/// Handle signup form submission.
///
/// Duplicate emails and missing fields re-render the form with the reason.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    let created = match NewUser::from_parts(
        form.email.as_deref(),
        form.password.as_deref(),
        form.role.as_deref(),
    ) {
        Ok(new_user) => state.db.create_user(new_user).await,
        Err(e) => Err(e),
    };

    let (status, message) = match created {
        Ok(_) => return Ok(Redirect::to("/login?signed_up=true").into_response()),
        Err(AppError::InvalidInput(msg)) => (StatusCode::BAD_REQUEST, msg),
        Err(AppError::UserAlreadyExists) => (
            StatusCode::CONFLICT,
            "This email is already registered.".to_string(),
        ),
        Err(e) => return Err(e),
    };

    let page = SignupTemplate {
        nav: Navbar::new(current_user(&session).await),
        email: form.email.unwrap_or_default(),
        error: Some(message),
    };
    Ok((status, page).into_response())
}
