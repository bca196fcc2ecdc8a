use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::AppState;

/// Health check endpoint
///
/// Reports whether the data file can be read and parsed, with record counts.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let (store_status, products, users) = match state.db.try_load().await {
        Ok(doc) => ("readable", doc.products.len(), doc.users.len()),
        Err(e) => {
            tracing::error!("Store health check failed: {:?}", e);
            ("unreadable", 0, 0)
        }
    };

    Json(json!({
        "status": if store_status == "readable" { "healthy" } else { "unhealthy" },
        "store": store_status,
        "products": products,
        "users": users,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
