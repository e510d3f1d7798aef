//! PostgreSQL repository implementations.
//!
//! - [`PgMappingRepository`] - URL mapping storage and retrieval
//! - [`pool`] - Connection pool setup and migrations

pub mod pg_mapping_repository;
pub mod pool;

pub use pg_mapping_repository::PgMappingRepository;
