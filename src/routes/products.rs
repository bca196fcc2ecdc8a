use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::AppState;
use crate::db::ProductQuery;
use crate::error::Result;
use crate::models::{NewProduct, Product, ProductPatch};

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

/// List products
///
/// Supports `?search=` (case-insensitive, name or description) and `?sort=name`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    Json(state.db.list_products(&query).await)
}

/// Fetch a single product, 404 when absent
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>> {
    Ok(Json(state.db.get_product(id).await?))
}

/// Create a product; the id is assigned by the server
pub async fn create_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let product = state.db.create_product(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Merge the submitted fields into an existing product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    patch: std::result::Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(patch) = patch?;
    Ok(Json(state.db.update_product(id, patch).await?))
}

/// Replace every field of an existing product
pub async fn replace_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    payload: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<Product>> {
    let Json(payload) = payload?;
    Ok(Json(state.db.replace_product(id, payload).await?))
}

/// Delete a product, 404 when absent
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteProductResponse>> {
    state.db.delete_product(id).await?;

    Ok(Json(DeleteProductResponse {
        message: "Product deleted".to_string(),
    }))
}
