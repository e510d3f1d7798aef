//! Short code issuance and resolution service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::code_generator::{CODE_LENGTH, CodeGenerator, GenerationError};
use crate::utils::url_validator::{UrlValidationError, validate_url};

/// Insert attempts made by [`Shortener::add`] before giving up on collisions.
pub const MAX_ATTEMPTS: usize = 5;

/// Failure of a shortener operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenerError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("exhausted retries after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error("short code cannot be empty")]
    EmptyCode,

    #[error("short code not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Operations offered to the action layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Validates `raw_url`, stores it under a fresh code and returns the code.
    async fn add(&self, raw_url: &str) -> Result<String, ShortenerError>;

    /// Resolves a code to its original URL.
    async fn get(&self, short_code: &str) -> Result<String, ShortenerError>;

    /// Returns one page of mappings, newest first.
    ///
    /// Callers validate `limit` and `offset` beforehand.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, ShortenerError>;

    /// Removes the mapping for a code.
    async fn delete(&self, short_code: &str) -> Result<bool, ShortenerError>;
}

/// [`Shortener`] over a [`MappingRepository`] and a [`CodeGenerator`].
///
/// Stateless between calls; the repository owns all durable state. Failures
/// are returned, never logged as errors here.
pub struct ShortenerService<R: MappingRepository, G: CodeGenerator> {
    repository: Arc<R>,
    generator: G,
}

impl<R: MappingRepository, G: CodeGenerator> ShortenerService<R, G> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>, generator: G) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

#[async_trait]
impl<R: MappingRepository, G: CodeGenerator> Shortener for ShortenerService<R, G> {
    /// Stores `raw_url` under a random code.
    ///
    /// # Collisions
    ///
    /// A unique violation on the code triggers a retry with a new code, up to
    /// [`MAX_ATTEMPTS`] inserts in total. Every other failure ends the call
    /// immediately.
    ///
    /// # Errors
    ///
    /// - [`ShortenerError::InvalidUrl`] if validation fails (nothing is stored)
    /// - [`ShortenerError::Generation`] if randomness is unavailable
    /// - [`ShortenerError::Store`] on any non-collision storage failure
    /// - [`ShortenerError::RetriesExhausted`] if every attempt collided
    async fn add(&self, raw_url: &str) -> Result<String, ShortenerError> {
        validate_url(raw_url)?;

        for attempt in 1..=MAX_ATTEMPTS {
            let code = self.generator.generate(CODE_LENGTH)?;

            match self.repository.insert(raw_url, &code).await {
                Ok(()) => {
                    tracing::debug!(attempt, code = %code, "short code issued");
                    return Ok(code);
                }
                Err(StoreError::UniqueViolation) => {
                    tracing::warn!(attempt, "code collision, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ShortenerError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
        })
    }

    async fn get(&self, short_code: &str) -> Result<String, ShortenerError> {
        if short_code.is_empty() {
            return Err(ShortenerError::EmptyCode);
        }

        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| ShortenerError::NotFound(short_code.to_string()))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, ShortenerError> {
        let items = self.repository.list_page(limit, offset).await?;
        tracing::debug!(limit, offset, count = items.len(), "listed mappings");
        Ok(items)
    }

    /// Hard-deletes a mapping.
    ///
    /// A code with nothing to delete is [`ShortenerError::NotFound`], an
    /// expected outcome rather than a storage failure.
    async fn delete(&self, short_code: &str) -> Result<bool, ShortenerError> {
        if short_code.is_empty() {
            return Err(ShortenerError::EmptyCode);
        }

        let rows_affected = self.repository.delete_by_code(short_code).await?;
        if rows_affected == 0 {
            return Err(ShortenerError::NotFound(short_code.to_string()));
        }

        Ok(true)
    }
}
