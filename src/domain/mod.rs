//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or the CLI.
//! Orchestration lives in [`crate::application`].

pub mod entities;
pub mod repositories;
