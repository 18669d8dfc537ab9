mod like;
mod reply;
mod thread;

pub use like::Like;
pub use reply::Reply;
pub use thread::{NewThread, Thread, ThreadDetail, ThreadListEntry};
