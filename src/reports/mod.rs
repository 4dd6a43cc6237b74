//! Read-only reporting over the threads collection.

mod handlers;

pub use handlers::{get_thread_count, get_thread_count_by_date_range};
