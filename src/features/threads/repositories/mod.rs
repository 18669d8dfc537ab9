mod thread_repository;

pub use thread_repository::{PgThreadRepository, ThreadRepository};
