//! Server-rendered shop pages.

pub mod auth;
pub mod products;
pub mod views;

pub use views::{ConfirmTemplate, MessageTemplate, Navbar, ProductView, format_price};

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

/// HTML page routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::home))
        .route("/products", get(products::index))
        .route(
            "/products/new",
            get(products::new_form).post(products::create),
        )
        .route("/products/{id}", get(products::show))
        .route(
            "/products/{id}/edit",
            get(products::edit_form).post(products::update),
        )
        .route(
            "/products/{id}/delete",
            get(products::confirm_delete).post(products::delete),
        )
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/logout", post(auth::logout))
}
