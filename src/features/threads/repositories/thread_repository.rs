use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::threads::models::{
    Like, NewThread, Reply, Thread, ThreadDetail, ThreadListEntry,
};
use crate::features::users::models::UserSummary;

/// Persistence for threads and the relations shown alongside them.
///
/// `update_content` and `delete` return the number of affected rows; zero
/// means no thread had that id.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn insert(&self, thread: NewThread) -> Result<()>;

    /// Newest first
    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<ThreadListEntry>>;

    async fn find_detail(&self, id: Uuid) -> Result<Option<ThreadDetail>>;

    async fn update_content(&self, id: Uuid, content: &str) -> Result<u64>;

    async fn delete(&self, id: Uuid) -> Result<u64>;
}

pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn likes_for(&self, thread_ids: &[Uuid]) -> Result<Vec<Like>> {
        if thread_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, LikeRow>(
            r#"
            SELECT l.id, l.thread_id, l.created_at, l.updated_at,
                   u.id AS user_id, u.username, u.full_name, u.profile_picture
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.thread_id = ANY($1)
            "#,
        )
        .bind(thread_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load thread likes: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(Like::from).collect())
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn insert(&self, thread: NewThread) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO threads (id, content, image, user_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(thread.id)
        .bind(&thread.content)
        .bind(&thread.image)
        .bind(thread.user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert thread: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<ThreadListEntry>> {
        let rows = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT t.id, t.content, t.image, t.created_at, t.updated_at,
                   u.id AS user_id, u.username, u.full_name, u.profile_picture,
                   (SELECT COUNT(*) FROM replies r WHERE r.thread_id = t.id) AS reply_count
            FROM threads t
            JOIN users u ON u.id = t.user_id
            ORDER BY t.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list threads: {:?}", e);
            AppError::Database(e)
        })?;

        let thread_ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut likes_by_thread: HashMap<Uuid, Vec<Like>> = HashMap::new();
        for like in self.likes_for(&thread_ids).await? {
            likes_by_thread.entry(like.thread_id).or_default().push(like);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let reply_count = row.reply_count;
                let thread = Thread::from(row);
                ThreadListEntry {
                    likes: likes_by_thread.remove(&thread.id).unwrap_or_default(),
                    thread,
                    reply_count,
                }
            })
            .collect())
    }

    async fn find_detail(&self, id: Uuid) -> Result<Option<ThreadDetail>> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT t.id, t.content, t.image, t.created_at, t.updated_at,
                   u.id AS user_id, u.username, u.full_name, u.profile_picture
            FROM threads t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get thread: {:?}", e);
            AppError::Database(e)
        })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let likes = self.likes_for(&[id]).await?;

        // No ORDER BY: replies come back in store order
        let replies = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT r.id, r.content, r.image, r.created_at, r.updated_at,
                   u.id AS user_id, u.username, u.full_name, u.profile_picture
            FROM replies r
            JOIN users u ON u.id = r.user_id
            WHERE r.thread_id = $1
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load thread replies: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Some(ThreadDetail {
            thread: row.into(),
            likes,
            replies: replies.into_iter().map(Reply::from).collect(),
        }))
    }

    async fn update_content(&self, id: Uuid, content: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE threads
            SET content = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(content)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update thread: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete thread: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected())
    }
}

// Flat rows as returned by the joins above

#[derive(Debug, FromRow)]
struct ThreadRow {
    id: Uuid,
    content: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    username: String,
    full_name: String,
    profile_picture: Option<String>,
    #[sqlx(default)]
    reply_count: i64,
}

impl From<ThreadRow> for Thread {
    fn from(row: ThreadRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            image: row.image,
            author: UserSummary {
                id: row.user_id,
                username: row.username,
                full_name: row.full_name,
                profile_picture: row.profile_picture,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct LikeRow {
    id: Uuid,
    thread_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    username: String,
    full_name: String,
    profile_picture: Option<String>,
}

impl From<LikeRow> for Like {
    fn from(row: LikeRow) -> Self {
        Self {
            id: row.id,
            thread_id: row.thread_id,
            user: UserSummary {
                id: row.user_id,
                username: row.username,
                full_name: row.full_name,
                profile_picture: row.profile_picture,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: Uuid,
    content: String,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    username: String,
    full_name: String,
    profile_picture: Option<String>,
}

impl From<ReplyRow> for Reply {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            image: row.image,
            user: UserSummary {
                id: row.user_id,
                username: row.username,
                full_name: row.full_name,
                profile_picture: row.profile_picture,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::database::run_migrations;
    use chrono::Duration;

    // These run against a real PostgreSQL:
    // DATABASE_URL=postgres://... cargo test -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        run_migrations(&pool).await.expect("migrations failed");
        pool
    }

    async fn insert_user(pool: &PgPool) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, username, full_name) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(format!("u{}", id.simple()))
            .bind("Repository Test")
            .execute(pool)
            .await
            .expect("user insert failed");
        id
    }

    async fn insert_thread_at(pool: &PgPool, user_id: Uuid, created_at: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO threads (id, content, user_id, created_at, updated_at) VALUES ($1, $2, $3, $4, $4)",
        )
        .bind(id)
        .bind(format!("thread at {}", created_at))
        .bind(user_id)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("thread insert failed");
        id
    }

    async fn drop_user(pool: &PgPool, id: Uuid) {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_list_page_orders_newest_first_with_counts() {
        let pool = pool().await;
        let repo = PgThreadRepository::new(pool.clone());
        let author = insert_user(&pool).await;
        let fan = insert_user(&pool).await;

        // Far-future timestamps keep these rows ahead of anything else in the table
        let base = Utc::now() + Duration::days(365 * 100);
        let mut ids = Vec::new();
        for i in 0..12 {
            ids.push(insert_thread_at(&pool, author, base + Duration::minutes(i)).await);
        }
        let newest = ids[11];

        sqlx::query("INSERT INTO likes (thread_id, user_id) VALUES ($1, $2)")
            .bind(newest)
            .bind(fan)
            .execute(&pool)
            .await
            .unwrap();
        for content in ["one", "two"] {
            sqlx::query("INSERT INTO replies (thread_id, user_id, content) VALUES ($1, $2, $3)")
                .bind(newest)
                .bind(fan)
                .bind(content)
                .execute(&pool)
                .await
                .unwrap();
        }

        let first = repo.list_page(10, 0).await.unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].thread.id, newest);
        assert_eq!(first[0].reply_count, 2);
        assert_eq!(first[0].likes.len(), 1);
        assert_eq!(first[0].likes[0].user.id, fan);
        assert_eq!(first[1].reply_count, 0);
        assert!(first[1].likes.is_empty());
        assert!(first
            .windows(2)
            .all(|pair| pair[0].thread.created_at >= pair[1].thread.created_at));

        let rest = repo.list_page(2, 10).await.unwrap();
        let rest_ids: Vec<Uuid> = rest.iter().map(|e| e.thread.id).collect();
        assert_eq!(rest_ids, vec![ids[1], ids[0]]);

        drop_user(&pool, fan).await;
        drop_user(&pool, author).await;
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn test_update_and_delete_report_affected_rows() {
        let pool = pool().await;
        let repo = PgThreadRepository::new(pool.clone());
        let author = insert_user(&pool).await;
        let id = Uuid::new_v4();

        repo.insert(NewThread {
            id,
            content: String::new(),
            image: Some("https://cdn.example.com/a.png".to_string()),
            user_id: author,
        })
        .await
        .unwrap();

        let detail = repo.find_detail(id).await.unwrap().expect("thread exists");
        assert_eq!(detail.thread.content, "");
        assert_eq!(detail.thread.author.id, author);
        assert!(detail.replies.is_empty());

        assert_eq!(repo.update_content(id, "edited").await.unwrap(), 1);
        assert_eq!(repo.update_content(Uuid::new_v4(), "x").await.unwrap(), 0);
        let detail = repo.find_detail(id).await.unwrap().unwrap();
        assert_eq!(detail.thread.content, "edited");

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.find_detail(id).await.unwrap().is_none());

        drop_user(&pool, author).await;
    }
}
