use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Like, Reply};
use crate::features::users::models::UserSummary;

/// A thread together with its owning user
#[derive(Debug, Clone)]
pub struct Thread {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub author: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for a thread insert. The id is generated by the service.
#[derive(Debug, Clone)]
pub struct NewThread {
    pub id: Uuid,
    pub content: String,
    pub image: Option<String>,
    pub user_id: Uuid,
}

/// One row of the thread feed: likes are loaded, replies only counted
#[derive(Debug, Clone)]
pub struct ThreadListEntry {
    pub thread: Thread,
    pub likes: Vec<Like>,
    pub reply_count: i64,
}

#[derive(Debug, Clone)]
pub struct ThreadDetail {
    pub thread: Thread,
    pub likes: Vec<Like>,
    pub replies: Vec<Reply>,
}
