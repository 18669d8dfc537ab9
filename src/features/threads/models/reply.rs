use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::users::models::UserSummary;

#[derive(Debug, Clone)]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
