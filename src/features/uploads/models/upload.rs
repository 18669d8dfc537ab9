use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a staged upload
#[allow(dead_code)]
#[derive(Debug, Clone, FromRow)]
pub struct Upload {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
