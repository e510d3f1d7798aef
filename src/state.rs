//! Process-wide wiring of the pool, repository, service and actions.

use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;

use crate::actions::Actions;
use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgMappingRepository, pool};
use crate::utils::code_generator::RandomCodeGenerator;

pub type AppActions = Actions<ShortenerService<PgMappingRepository, RandomCodeGenerator>>;

/// Everything a single command invocation needs.
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub actions: AppActions,
}

impl AppState {
    /// Connects to the database and builds the action layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be opened or migrations fail.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = pool::connect(config).await?;
        tracing::info!("Connected to database");
        Ok(Self::from_pool(Arc::new(pool), config))
    }

    pub fn from_pool(pool: Arc<PgPool>, config: &Config) -> Self {
        let repository = Arc::new(PgMappingRepository::new(pool.clone()));
        let service = ShortenerService::new(repository, RandomCodeGenerator::new());
        let actions = Actions::new(Arc::new(service))
            .with_max_limit(config.list_max_limit)
            .with_timeout(config.action_timeout());

        Self { pool, actions }
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("Database pool closed");
    }
}
