//! Staged uploads.
//!
//! An upload row is created before the thread that uses it exists. Creating
//! a thread with `uploadId` consumes (deletes) the staged row.

pub mod models;
pub mod repositories;

pub use repositories::{PgUploadRepository, UploadRepository};
