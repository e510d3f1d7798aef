//! Utility functions for code generation, URL validation and output.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - URL validation rules
//! - [`db_error`] - `sqlx` error classification
//! - [`json_output`] - JSON record writer

pub mod code_generator;
pub mod db_error;
pub mod json_output;
pub mod url_validator;
