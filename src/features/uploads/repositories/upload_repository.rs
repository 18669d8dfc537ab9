use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::uploads::models::Upload;

#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// Delete a staged upload, returning it if it existed.
    async fn consume(&self, id: Uuid) -> Result<Option<Upload>>;
}

pub struct PgUploadRepository {
    pool: PgPool,
}

impl PgUploadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UploadRepository for PgUploadRepository {
    async fn consume(&self, id: Uuid) -> Result<Option<Upload>> {
        sqlx::query_as::<_, Upload>(
            r#"
            DELETE FROM uploads
            WHERE id = $1
            RETURNING id, user_id, url, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete upload: {:?}", e);
            AppError::Database(e)
        })
    }
}
