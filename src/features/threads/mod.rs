//! Threads: user-authored posts with likes and replies.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/threads` | Yes | Create a thread (consumes `uploadId`) |
//! | GET | `/api/threads?page=N` | No | Feed, 10 per page, newest first |
//! | GET | `/api/threads/{id}` | No | Thread with likes and replies |
//! | PATCH/PUT | `/api/threads/{id}` | Yes | Replace the content |
//! | DELETE | `/api/threads/{id}` | Yes | Delete the thread |
//!
//! Update and delete do not check that the caller owns the thread.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgThreadRepository;
pub use services::ThreadService;
