use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::UserSummary;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>> {
        sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT id, username, full_name, profile_picture
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user summary: {:?}", e);
            AppError::Database(e)
        })
    }
}
