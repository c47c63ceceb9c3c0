pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{init_db, init_schema, ConnectionManager};
pub use error::AppError;
pub use service::{ExtractionService, SubmissionService};
