//! Repository trait for URL mapping data access.

use crate::domain::entities::UrlMapping;
use async_trait::async_trait;

/// Failure reported by a [`MappingRepository`].
///
/// Variants keep enough shape for callers to tell a code collision, a
/// timeout and the stages of a list read apart, without exposing the
/// underlying driver's error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("short code already exists")]
    UniqueViolation,

    #[error("timed out waiting for a database connection")]
    Timeout,

    #[error("error executing query: {0}")]
    Query(String),

    #[error("error scanning row: {0}")]
    Scan(String),

    #[error("error iterating rows: {0}")]
    Rows(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Persistence gateway used by the shortener service.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Stores a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if `short_code` is already taken.
    async fn insert(&self, original_url: &str, short_code: &str) -> Result<(), StoreError>;

    /// Looks up the original URL of a live (unexpired) mapping.
    ///
    /// Returns `Ok(None)` when no live mapping has this code.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<String>, StoreError>;

    /// Lists mappings newest first, ties broken by insertion order.
    ///
    /// An empty page is `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Query`], [`StoreError::Scan`] and [`StoreError::Rows`]
    /// distinguish where the read failed.
    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, StoreError>;

    /// Hard-deletes the mapping with `short_code`, returning rows affected.
    async fn delete_by_code(&self, short_code: &str) -> Result<u64, StoreError>;
}
