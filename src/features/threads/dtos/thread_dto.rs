use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::features::threads::models::{Like, Reply, Thread, ThreadDetail, ThreadListEntry};
use crate::features::users::dtos::UserSummaryDto;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, FIRST_PAGE};

/// Request DTO for creating a thread
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadDto {
    /// Thread text (required, may be empty)
    pub content: String,

    /// Optional image reference
    pub image: Option<String>,

    /// Staged upload to consume once the thread is saved. Parsed by the
    /// service so a bad value never blocks the thread insert.
    pub upload_id: Option<String>,
}

/// Request DTO for updating a thread. Only the content can change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThreadDto {
    pub content: String,
}

/// Query params for the thread feed
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListThreadsQuery {
    /// Page number (1-indexed, default: 1; lower values are treated as 1)
    pub page: Option<i64>,
}

impl ListThreadsQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(FIRST_PAGE).max(FIRST_PAGE)
    }

    pub fn limit(&self) -> i64 {
        DEFAULT_PAGE_SIZE
    }

    /// SQL OFFSET for the requested page
    pub fn offset(&self) -> i64 {
        (self.page() - 1).saturating_mul(self.limit())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponseDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
}

impl From<Like> for LikeResponseDto {
    fn from(l: Like) -> Self {
        Self {
            id: l.id,
            created_at: l.created_at,
            updated_at: l.updated_at,
            user: l.user.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponseDto {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
}

impl From<Reply> for ReplyResponseDto {
    fn from(r: Reply) -> Self {
        Self {
            id: r.id,
            content: r.content,
            image: r.image,
            created_at: r.created_at,
            updated_at: r.updated_at,
            user: r.user.into(),
        }
    }
}

/// Feed item: `replies` holds the number of replies, not the replies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThreadResponseDto {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
    pub likes: Vec<LikeResponseDto>,
    pub replies: i64,
}

impl From<ThreadListEntry> for ThreadResponseDto {
    fn from(entry: ThreadListEntry) -> Self {
        let Thread {
            id,
            content,
            image,
            author,
            created_at,
            updated_at,
        } = entry.thread;

        Self {
            id,
            content,
            image,
            created_at,
            updated_at,
            user: author.into(),
            likes: entry.likes.into_iter().map(Into::into).collect(),
            replies: entry.reply_count,
        }
    }
}

/// Single thread with its full replies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThreadDetailResponseDto {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserSummaryDto,
    pub likes: Vec<LikeResponseDto>,
    pub replies: Vec<ReplyResponseDto>,
}

impl From<ThreadDetail> for ThreadDetailResponseDto {
    fn from(detail: ThreadDetail) -> Self {
        let Thread {
            id,
            content,
            image,
            author,
            created_at,
            updated_at,
        } = detail.thread;

        Self {
            id,
            content,
            image,
            created_at,
            updated_at,
            user: author.into(),
            likes: detail.likes.into_iter().map(Into::into).collect(),
            replies: detail.replies.into_iter().map(Into::into).collect(),
        }
    }
}
