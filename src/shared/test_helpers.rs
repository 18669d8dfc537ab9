use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{extract::Request, middleware::Next, Router};
use chrono::{DateTime, Utc};
use fake::faker::internet::en::Username;
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::threads::models::{
    Like, NewThread, Reply, Thread, ThreadDetail, ThreadListEntry,
};
use crate::features::threads::repositories::ThreadRepository;
use crate::features::uploads::models::Upload;
use crate::features::uploads::UploadRepository;
use crate::features::users::models::UserSummary;
use crate::features::users::UserRepository;

/// In-memory stand-in for the Postgres repositories.
///
/// Counts every repository call so tests can assert that rejected requests
/// never reached the store.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    store_calls: AtomicUsize,
    fail_upload_deletes: AtomicBool,
}

#[derive(Default)]
struct StoreState {
    users: Vec<UserSummary>,
    threads: Vec<StoredThread>,
    likes: Vec<Like>,
    replies: Vec<(Uuid, Reply)>,
    uploads: Vec<Upload>,
}

#[derive(Clone)]
struct StoredThread {
    id: Uuid,
    content: String,
    image: Option<String>,
    user_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StoreState {
    fn user(&self, id: Uuid) -> Result<UserSummary> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::Internal(format!("dangling user reference {}", id)))
    }

    fn thread(&self, stored: &StoredThread) -> Result<Thread> {
        Ok(Thread {
            id: stored.id,
            content: stored.content.clone(),
            image: stored.image.clone(),
            author: self.user(stored.user_id)?,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        })
    }

    fn likes_of(&self, thread_id: Uuid) -> Vec<Like> {
        self.likes
            .iter()
            .filter(|l| l.thread_id == thread_id)
            .cloned()
            .collect()
    }

    fn replies_of(&self, thread_id: Uuid) -> Vec<Reply> {
        self.replies
            .iter()
            .filter(|(id, _)| *id == thread_id)
            .map(|(_, r)| r.clone())
            .collect()
    }
}

impl InMemoryStore {
    fn state(&self) -> std::sync::MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    fn record_call(&self) {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn seed_user(&self) -> UserSummary {
        let user = UserSummary {
            id: Uuid::new_v4(),
            username: Username().fake(),
            full_name: Name().fake(),
            profile_picture: None,
        };
        self.state().users.push(user.clone());
        user
    }

    pub fn seed_thread(&self, user_id: Uuid, content: &str, created_at: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.state().threads.push(StoredThread {
            id,
            content: content.to_string(),
            image: None,
            user_id,
            created_at,
            updated_at: created_at,
        });
        id
    }

    pub fn seed_like(&self, thread_id: Uuid, user_id: Uuid) {
        let mut state = self.state();
        let user = state.user(user_id).unwrap();
        let now = Utc::now();
        state.likes.push(Like {
            id: Uuid::new_v4(),
            thread_id,
            user,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn seed_reply(&self, thread_id: Uuid, user_id: Uuid, content: &str) {
        let mut state = self.state();
        let user = state.user(user_id).unwrap();
        let now = Utc::now();
        state.replies.push((
            thread_id,
            Reply {
                id: Uuid::new_v4(),
                content: content.to_string(),
                image: None,
                user,
                created_at: now,
                updated_at: now,
            },
        ));
    }

    pub fn seed_upload(&self, user_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.state().uploads.push(Upload {
            id,
            user_id: Some(user_id),
            url: format!("https://cdn.example.com/uploads/{}.png", id),
            created_at: Utc::now(),
        });
        id
    }

    /// Make every subsequent upload delete fail
    pub fn fail_upload_deletes(&self) {
        self.fail_upload_deletes.store(true, Ordering::SeqCst);
    }

    pub fn has_upload(&self, id: Uuid) -> bool {
        self.state().uploads.iter().any(|u| u.id == id)
    }

    pub fn thread_count(&self) -> usize {
        self.state().threads.len()
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThreadRepository for InMemoryStore {
    async fn insert(&self, thread: NewThread) -> Result<()> {
        self.record_call();
        let now = Utc::now();
        self.state().threads.push(StoredThread {
            id: thread.id,
            content: thread.content,
            image: thread.image,
            user_id: thread.user_id,
            created_at: now,
            updated_at: now,
        });
        Ok(())
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<ThreadListEntry>> {
        self.record_call();
        let state = self.state();
        let mut threads = state.threads.clone();
        threads.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        threads
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|stored| {
                Ok(ThreadListEntry {
                    thread: state.thread(stored)?,
                    likes: state.likes_of(stored.id),
                    reply_count: state.replies_of(stored.id).len() as i64,
                })
            })
            .collect()
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<ThreadDetail>> {
        self.record_call();
        let state = self.state();
        let Some(stored) = state.threads.iter().find(|t| t.id == id) else {
            return Ok(None);
        };

        Ok(Some(ThreadDetail {
            thread: state.thread(stored)?,
            likes: state.likes_of(id),
            replies: state.replies_of(id),
        }))
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<u64> {
        self.record_call();
        let mut state = self.state();
        match state.threads.iter_mut().find(|t| t.id == id) {
            Some(thread) => {
                thread.content = content.to_string();
                thread.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        self.record_call();
        let mut state = self.state();
        let before = state.threads.len();
        state.threads.retain(|t| t.id != id);
        let removed = (before - state.threads.len()) as u64;
        if removed > 0 {
            state.likes.retain(|l| l.thread_id != id);
            state.replies.retain(|(thread_id, _)| *thread_id != id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_summary(&self, id: Uuid) -> Result<Option<UserSummary>> {
        self.record_call();
        Ok(self.state().users.iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl UploadRepository for InMemoryStore {
    async fn consume(&self, id: Uuid) -> Result<Option<Upload>> {
        self.record_call();
        if self.fail_upload_deletes.load(Ordering::SeqCst) {
            return Err(AppError::Internal("upload store unavailable".to_string()));
        }

        let mut state = self.state();
        let position = state.uploads.iter().position(|u| u.id == id);
        Ok(position.map(|i| state.uploads.remove(i)))
    }
}

/// Layer that authenticates every request as `user_id`
pub fn with_user_auth(router: Router, user_id: Uuid) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| async move {
            request
                .extensions_mut()
                .insert(AuthenticatedUser { user_id });
            next.run(request).await
        },
    ))
}

