pub mod analytics;
pub mod category;
pub mod errors;
pub mod filter;
pub mod item;
pub mod openapi;
