//! Read-only access to user accounts.
//!
//! Accounts are managed elsewhere; threads only need the public summary of
//! an author (id, username, full name, profile picture).

pub mod dtos;
pub mod models;
pub mod repositories;

pub use repositories::{PgUserRepository, UserRepository};
