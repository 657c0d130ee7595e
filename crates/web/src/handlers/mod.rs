//! HTTP request handlers.

pub mod health_handler;
pub mod page_handler;
pub mod task_handler;

pub use health_handler::health_check;
pub use page_handler::index;
pub use task_handler::dispatch;
