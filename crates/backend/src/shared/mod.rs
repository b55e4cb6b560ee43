pub mod audit;
pub mod cache;
pub mod config;
pub mod data;
pub mod error;
pub mod sanitize;
