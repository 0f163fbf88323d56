use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use pantry_catalog::{page_slice, CatalogError, Category, Product};
use pantry_core::{ExpenseRecord, Owner};
use pantry_order::{confirm_order, OrderLine};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::AppError,
    extract::{AppJson, AppQuery},
    middleware::user_auth_middleware,
    state::AppState,
};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub category: Category,
    pub page: usize,
    pub page_size: usize,
    pub items: Vec<Product>,
    pub has_more: bool,
}

/// Quantity as typed, or already a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Units(u64),
    Text(String),
}

impl QuantityInput {
    fn as_text(&self) -> String {
        match self {
            QuantityInput::Units(n) => n.to_string(),
            QuantityInput::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub product_id: Uuid,
    pub quantity: QuantityInput,
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub line: OrderLine,
    pub expense: ExpenseRecord,
}

pub fn routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/catalog/{category}/confirm", post(confirm))
        .route_layer(axum::middleware::from_fn_with_state(state, user_auth_middleware));

    Router::new()
        .route("/catalog/{category}/products", get(list_products))
        .merge(authenticated)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /catalog/{category}/products?page=N
async fn list_products(
    State(state): State<AppState>,
    Path(category): Path<String>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ProductPageResponse>, AppError> {
    let category: Category = category.parse()?;
    let page = query.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::ValidationError("page starts at 1".to_string()));
    }

    let products = state.catalog.fetch(category).await?;
    let items = page_slice(&products, page, state.page_size).to_vec();
    let has_more = page.saturating_mul(state.page_size) < products.len();

    Ok(Json(ProductPageResponse {
        category,
        page,
        page_size: state.page_size,
        items,
        has_more,
    }))
}

/// POST /catalog/{category}/confirm
/// Record the selected product and quantity as an expense on the caller's budget
async fn confirm(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Extension(owner): Extension<Owner>,
    AppJson(req): AppJson<ConfirmRequest>,
) -> Result<(StatusCode, Json<ConfirmResponse>), AppError> {
    let category: Category = category.parse()?;
    let product = state
        .catalog
        .find(category, req.product_id)
        .await?
        .ok_or(CatalogError::ProductNotFound(req.product_id))?;

    let (line, expense) =
        confirm_order(&state.expenses, product, &req.quantity.as_text(), owner.budget_id).await?;

    Ok((StatusCode::CREATED, Json(ConfirmResponse { line, expense })))
}
