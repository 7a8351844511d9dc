// src/lib.rs
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod features;
pub mod logging;
pub mod shared;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use app::{App, Route};
pub use error::{AppError, AppResult};
