//! Application layer: orchestration of validation, code generation and storage.
//!
//! - [`services::shortener_service::ShortenerService`] - add, resolve, list and delete mappings

pub mod services;
