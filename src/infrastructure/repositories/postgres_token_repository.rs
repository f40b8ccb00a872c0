use super::token_repository::TokenRepository;
use crate::error::AppResult;
use crate::infrastructure::db::{check_connection, DbPool};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct PostgresTokenRepository {
    pool: Arc<DbPool>,
}

impl PostgresTokenRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn save(&self, key: &str, value: &str) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO app_tokens (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(())
    }

    async fn load(&self, key: &str) -> AppResult<Option<String>> {
        let pool = self.pool.as_ref();
        let value = sqlx::query_scalar::<_, String>(
            r#"
            SELECT value
            FROM app_tokens
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(pool)
        .await?;

        Ok(value)
    }

    async fn health_check(&self) -> bool {
        check_connection(&self.pool).await.is_ok()
    }
}
