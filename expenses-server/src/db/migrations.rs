//! Schema setup for the expenses table

use sqlx::PgPool;

const CREATE_EXPENSES: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id SERIAL PRIMARY KEY,
        title TEXT,
        amount FLOAT,
        note TEXT,
        tags TEXT[]
    )
"#;

/// Ensure the schema exists. Safe to run on every startup.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running expenses migrations...");

    sqlx::query(CREATE_EXPENSES).execute(pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");

        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'expenses')",
        )
        .fetch_one(&pool)
        .await
        .expect("query failed");
        assert!(exists.0);
    }
}
