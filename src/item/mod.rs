pub mod handlers;
pub mod models;
pub mod repo;
pub mod service;

// Re-export handlers for use in main.rs
pub use handlers::{create_item, delete_item, get_item, list_items, update_item};
