//! expenses-server: HTTP service for recording personal expenses
//!
//! Create, list, fetch and update expense records stored in PostgreSQL.
//! Handlers reach the store through [`db::ExpenseStore`], injected via
//! [`http::AppState`].

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, ExpenseRepo, ExpenseStore};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::{Expense, ExpenseInput};
