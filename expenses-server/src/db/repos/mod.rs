//! Repository implementations for database access
//!
//! Handlers reach the store through [`ExpenseStore`] so the backing store is
//! injected via router state rather than held in a global.

pub mod expenses;

use async_trait::async_trait;

use crate::models::{Expense, ExpenseInput};

pub use expenses::ExpenseRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub fn expense_not_found(id: i32) -> Self {
        Self::NotFound {
            resource: "expense",
            id: id.to_string(),
        }
    }
}

/// Storage operations behind the expense endpoints.
///
/// Each operation is a single statement against the store; there is no
/// cross-call state.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Insert a new record, letting the store assign the id.
    async fn create(&self, input: ExpenseInput) -> Result<Expense, DbError>;

    /// All records in ascending id order.
    async fn list(&self) -> Result<Vec<Expense>, DbError>;

    /// Fetch one record, `NotFound` when the id has no row.
    async fn get(&self, id: i32) -> Result<Expense, DbError>;

    /// Overwrite every non-id field, `NotFound` when the id has no row.
    async fn update(&self, id: i32, input: ExpenseInput) -> Result<Expense, DbError>;
}
