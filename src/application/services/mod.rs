//! Business logic services for the application layer.

pub mod shortener_service;

#[cfg(test)]
pub use shortener_service::MockShortener;
pub use shortener_service::{MAX_ATTEMPTS, Shortener, ShortenerError, ShortenerService};
