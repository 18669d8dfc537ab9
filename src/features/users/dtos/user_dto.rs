use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::users::models::UserSummary;

/// Author/liker summary embedded in thread responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub profile_picture: Option<String>,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id,
            username: u.username,
            full_name: u.full_name,
            profile_picture: u.profile_picture,
        }
    }
}
