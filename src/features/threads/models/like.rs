use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::features::users::models::UserSummary;

#[derive(Debug, Clone)]
pub struct Like {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
