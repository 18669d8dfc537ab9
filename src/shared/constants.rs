/// Number of threads returned per page
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// First page; anything below is clamped to it
pub const FIRST_PAGE: i64 = 1;
