use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::threads::dtos::{
    CreateThreadDto, ListThreadsQuery, ThreadDetailResponseDto, ThreadResponseDto,
    UpdateThreadDto,
};
use crate::features::threads::models::NewThread;
use crate::features::threads::repositories::ThreadRepository;
use crate::features::uploads::UploadRepository;
use crate::features::users::UserRepository;
use crate::shared::validation::parse_uuid_v4;

/// Service for thread operations
pub struct ThreadService {
    threads: Arc<dyn ThreadRepository>,
    users: Arc<dyn UserRepository>,
    uploads: Arc<dyn UploadRepository>,
}

impl ThreadService {
    pub fn new(
        threads: Arc<dyn ThreadRepository>,
        users: Arc<dyn UserRepository>,
        uploads: Arc<dyn UploadRepository>,
    ) -> Self {
        Self {
            threads,
            users,
            uploads,
        }
    }

    /// Create a thread owned by the caller and return its id.
    ///
    /// A staged upload named by `upload_id` is consumed after the insert.
    /// Failing to consume it is logged and does not fail the request.
    pub async fn create(&self, user: &AuthenticatedUser, dto: CreateThreadDto) -> Result<Uuid> {
        let author = self
            .users
            .find_summary(user.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let thread = NewThread {
            id: Uuid::new_v4(),
            content: dto.content,
            image: dto.image,
            user_id: author.id,
        };
        let thread_id = thread.id;

        self.threads.insert(thread).await?;
        info!("Thread created: id={}, user={}", thread_id, author.username);

        if let Some(raw) = dto.upload_id {
            self.consume_upload(&raw, thread_id).await;
        }

        Ok(thread_id)
    }

    async fn consume_upload(&self, raw: &str, thread_id: Uuid) {
        let upload_id = match Uuid::parse_str(raw) {
            Ok(id) => id,
            Err(e) => {
                warn!(
                    "Skipping upload {:?} for thread {}: invalid id: {}",
                    raw, thread_id, e
                );
                return;
            }
        };

        match self.uploads.consume(upload_id).await {
            Ok(Some(upload)) => debug!("Upload consumed: id={}, url={}", upload.id, upload.url),
            Ok(None) => debug!("Upload {} already gone", upload_id),
            Err(e) => warn!(
                "Failed to consume upload {} for thread {}: {}",
                upload_id, thread_id, e
            ),
        }
    }

    /// One page of the feed, newest first
    pub async fn list(&self, query: &ListThreadsQuery) -> Result<Vec<ThreadResponseDto>> {
        let entries = self
            .threads
            .list_page(query.limit(), query.offset())
            .await?;

        Ok(entries.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, thread_id: &str) -> Result<ThreadDetailResponseDto> {
        let id = parse_uuid_v4(thread_id, "thread")?;

        self.threads
            .find_detail(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))
    }

    /// Overwrite the content of a thread.
    ///
    /// Any authenticated caller may update any thread; ownership is not checked.
    pub async fn update(&self, thread_id: &str, dto: UpdateThreadDto) -> Result<()> {
        let id = parse_uuid_v4(thread_id, "thread")?;

        if self.threads.update_content(id, &dto.content).await? == 0 {
            return Err(AppError::NotFound("Thread not found".to_string()));
        }

        info!("Thread updated: id={}", id);
        Ok(())
    }

    /// Physically delete a thread. Ownership is not checked.
    pub async fn delete(&self, thread_id: &str) -> Result<()> {
        let id = parse_uuid_v4(thread_id, "thread")?;

        if self.threads.delete(id).await? == 0 {
            return Err(AppError::NotFound("Thread not found".to_string()));
        }

        info!("Thread deleted: id={}", id);
        Ok(())
    }
}
