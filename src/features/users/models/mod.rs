mod user;

pub use user::UserSummary;
