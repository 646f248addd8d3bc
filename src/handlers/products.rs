use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info, warn};

use crate::{
    error::{AppError, AppResult},
    extract::ProductJson,
    models::{Product, ProductPayload},
    AppState,
};

fn log_not_found(err: AppError) -> AppError {
    warn!(%err, "Product lookup missed");
    err
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let products = state.products.read().await.list();

    info!(count = products.len(), "Listed products");

    Json(products)
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    ProductJson(payload): ProductJson<ProductPayload>,
) -> impl IntoResponse {
    let product = state.products.write().await.create(payload);

    info!(id = product.id, name = %product.name, "Created product");

    let location = format!("/api/products/{}", product.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    )
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = state.products.read().await.get(id).map_err(log_not_found)?;

    debug!(id, "Fetched product");

    Ok(Json(product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ProductJson(payload): ProductJson<ProductPayload>,
) -> AppResult<StatusCode> {
    state
        .products
        .write()
        .await
        .update(id, payload)
        .map_err(log_not_found)?;

    info!(id, "Updated product");

    Ok(StatusCode::NO_CONTENT)
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state
        .products
        .write()
        .await
        .delete(id)
        .map_err(log_not_found)?;

    info!(id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
