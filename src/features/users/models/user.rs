use sqlx::FromRow;
use uuid::Uuid;

/// Public projection of a user row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub profile_picture: Option<String>,
}
