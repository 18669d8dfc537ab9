use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller identity resolved from the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}
