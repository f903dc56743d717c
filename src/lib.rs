pub mod api;
pub mod cache;
pub mod config;
pub mod database;
pub mod error;
pub mod feed;
pub mod follows;
pub mod pagination;
pub mod posting;
pub mod telemetry;
pub mod utils;
