use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use pantry_core::{ExpenseRecord, ExpenseSummary, Owner};
use pantry_shared::BudgetId;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::AppError, extract::AppJson, middleware::user_auth_middleware, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub description: String,
    pub total_expenses: Decimal,
    pub budget_id: BudgetId,
}

#[derive(Debug, Deserialize)]
pub struct ExpensesForDateRequest {
    pub date: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/expenses/range", get(get_expenses_for_range))
        .route_layer(axum::middleware::from_fn_with_state(state, user_auth_middleware));

    Router::new()
        .route("/expenses", post(create_expense))
        .route("/expenses/date", post(get_expenses_for_date))
        .merge(authenticated)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /expenses
async fn create_expense(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseRecord>), AppError> {
    let record = state
        .expenses
        .create_expense(req.description, req.total_expenses, req.budget_id)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /expenses/date
async fn get_expenses_for_date(
    State(state): State<AppState>,
    AppJson(req): AppJson<ExpensesForDateRequest>,
) -> Result<Json<ExpenseSummary>, AppError> {
    let summary = state.expenses.expenses_for_date(&req.date).await?;
    Ok(Json(summary))
}

/// GET /expenses/range
/// Trailing window for the caller's budget
async fn get_expenses_for_range(
    State(state): State<AppState>,
    Extension(owner): Extension<Owner>,
) -> Result<Json<ExpenseSummary>, AppError> {
    let summary = state.expenses.expenses_for_recent_days(&owner).await?;
    Ok(Json(summary))
}
