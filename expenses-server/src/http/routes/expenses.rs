//! Expense endpoints
//!
//! Each handler performs exactly one store operation.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{ExpenseId, JsonBody};
use crate::http::server::AppState;
use crate::models::{Expense, ExpenseInput};

/// POST /expenses - create a new expense
async fn create_expense(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses - list all expenses
async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.store.list().await?;
    Ok(Json(expenses))
}

/// GET /expenses/{id} - get a single expense
async fn get_expense(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
) -> Result<Json<Expense>, ApiError> {
    let expense = state.store.get(id).await?;
    Ok(Json(expense))
}

/// PUT /expenses/{id} - overwrite every non-id field
async fn update_expense(
    State(state): State<AppState>,
    ExpenseId(id): ExpenseId,
    JsonBody(input): JsonBody<ExpenseInput>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = state.store.update(id, input).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// Expense routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense))
}

// Router-level tests live in tests/expenses_api.rs
