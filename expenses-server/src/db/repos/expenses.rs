//! Expense repository
//!
//! One statement per operation:
//! - create: INSERT ... RETURNING (store assigns id)
//! - update: UPDATE ... RETURNING (no row means not found, no pre-check)

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, ExpenseStore};
use crate::models::{Expense, ExpenseInput};

/// Columns are nullable, so NULLs are read back as zero values.
const EXPENSE_COLUMNS: &str = r#"
    id,
    COALESCE(title, '') AS title,
    COALESCE(amount, 0) AS amount,
    COALESCE(note, '') AS note,
    COALESCE(tags, '{}') AS tags
"#;

/// PostgreSQL-backed expense repository
#[derive(Clone)]
pub struct ExpenseRepo {
    pool: PgPool,
}

impl ExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ExpenseStore for ExpenseRepo {
    async fn create(&self, input: ExpenseInput) -> Result<Expense, DbError> {
        let sql = format!(
            "INSERT INTO expenses (title, amount, note, tags) VALUES ($1, $2, $3, $4) RETURNING {EXPENSE_COLUMNS}"
        );

        let expense = sqlx::query_as::<_, Expense>(&sql)
            .bind(&input.title)
            .bind(input.amount)
            .bind(&input.note)
            .bind(&input.tags)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!(id = expense.id, "expense created");
        Ok(expense)
    }

    async fn list(&self) -> Result<Vec<Expense>, DbError> {
        let sql = format!("SELECT {EXPENSE_COLUMNS} FROM expenses ORDER BY id");

        let expenses = sqlx::query_as::<_, Expense>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(expenses)
    }

    async fn get(&self, id: i32) -> Result<Expense, DbError> {
        let sql = format!("SELECT {EXPENSE_COLUMNS} FROM expenses WHERE id = $1");

        sqlx::query_as::<_, Expense>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::expense_not_found(id))
    }

    async fn update(&self, id: i32, input: ExpenseInput) -> Result<Expense, DbError> {
        let sql = format!(
            "UPDATE expenses SET title = $2, amount = $3, note = $4, tags = $5 WHERE id = $1 RETURNING {EXPENSE_COLUMNS}"
        );

        let expense = sqlx::query_as::<_, Expense>(&sql)
            .bind(id)
            .bind(&input.title)
            .bind(input.amount)
            .bind(&input.note)
            .bind(&input.tags)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::expense_not_found(id))?;

        tracing::debug!(id, "expense updated");
        Ok(expense)
    }
}
