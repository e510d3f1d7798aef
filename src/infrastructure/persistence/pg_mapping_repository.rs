//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{MappingRepository, StoreError};
use crate::utils::db_error::{map_list_error, map_sqlx_error};

const INSERT_QUERY: &str = "INSERT INTO url (original_url, short_code) VALUES ($1, $2)";

const LOOKUP_QUERY: &str = r#"
    SELECT original_url
    FROM url
    WHERE short_code = $1
      AND (expires_at IS NULL OR expires_at > now())
"#;

const LIST_QUERY: &str = r#"
    SELECT id, original_url, short_code, created_at, expires_at
    FROM url
    ORDER BY created_at DESC, id DESC
    LIMIT $1 OFFSET $2
"#;

const DELETE_QUERY: &str = "DELETE FROM url WHERE short_code = $1";

/// PostgreSQL repository for URL mappings.
///
/// Queries are bound at runtime, so the crate builds without a live database.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, original_url: &str, short_code: &str) -> Result<(), StoreError> {
        sqlx::query(INSERT_QUERY)
            .bind(original_url)
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<String>, StoreError> {
        sqlx::query_scalar::<_, String>(LOOKUP_QUERY)
            .bind(short_code)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let rows = sqlx::query(LIST_QUERY)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(map_list_error)?;

        rows.iter()
            .map(|row| UrlMapping::from_row(row).map_err(|e| StoreError::Scan(e.to_string())))
            .collect()
    }

    async fn delete_by_code(&self, short_code: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_QUERY)
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
