pub mod handlers;
pub mod models;
pub mod repo;
pub mod service;

// Re-export handlers for use in main.rs
pub use handlers::{
    create_category, delete_category, get_category, list_categories, update_category,
};
