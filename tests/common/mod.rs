#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use urlshortener::actions::Actions;
use urlshortener::application::services::ShortenerService;
use urlshortener::infrastructure::persistence::PgMappingRepository;
use urlshortener::utils::code_generator::RandomCodeGenerator;

pub type TestActions = Actions<ShortenerService<PgMappingRepository, RandomCodeGenerator>>;

pub async fn insert_mapping(pool: &PgPool, code: &str, url: &str, minutes_ago: i32) {
    sqlx::query(
        "INSERT INTO url (original_url, short_code, created_at) \
         VALUES ($1, $2, now() - make_interval(mins => $3))",
    )
    .bind(url)
    .bind(code)
    .bind(minutes_ago)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_mapping_at(pool: &PgPool, code: &str, url: &str, created_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO url (original_url, short_code, created_at) VALUES ($1, $2, $3)")
        .bind(url)
        .bind(code)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_expired_mapping(pool: &PgPool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO url (original_url, short_code, expires_at) \
         VALUES ($1, $2, now() - INTERVAL '1 hour')",
    )
    .bind(url)
    .bind(code)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_mappings(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_actions(pool: PgPool) -> TestActions {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let service = ShortenerService::new(repository, RandomCodeGenerator::new());

    Actions::new(Arc::new(service))
        .with_max_limit(20)
        .with_timeout(Duration::from_secs(5))
}
