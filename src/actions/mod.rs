//! Action layer between the CLI and the shortener service.
//!
//! - [`handlers`] - [`Actions`] with one entry point per command
//! - [`dto`] - JSON records written on success
//! - [`shutdown`] - SIGINT/SIGTERM cancellation

pub mod dto;
pub mod handlers;
pub mod shutdown;

pub use handlers::{Actions, CancelSignal, DEFAULT_ACTION_TIMEOUT, DEFAULT_LIST_MAX_LIMIT};
