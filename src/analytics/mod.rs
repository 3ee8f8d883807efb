pub mod handlers;
pub mod models;
pub mod repo;
pub mod service;

// Re-export handlers for use in main.rs
pub use handlers::{average, count, median, percentile_90, sum};
