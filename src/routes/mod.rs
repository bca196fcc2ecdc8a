pub mod health;
pub mod products;
pub mod users;

pub use health::health_check;
pub use products::{
    create_product, delete_product, get_product, list_products, replace_product, update_product,
};
pub use users::{create_user, list_users};

use axum::{Router, routing::get};

use crate::AppState;

/// JSON API routes
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product)
                .patch(update_product)
                .put(replace_product)
                .delete(delete_product),
        )
        .route("/api/users", get(list_users).post(create_user))
}
