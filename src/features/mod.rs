pub mod auth;
pub mod threads;
pub mod uploads;
pub mod users;
