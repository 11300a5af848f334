//! Key-value store backing the read snapshots.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;

use crate::error::AppError;

pub const USERS_KEY: &str = "users";
pub const MAPS_KEY: &str = "maps";

/// Whole-value writes without expiry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;

    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
}

pub struct RedisCache {
    conn: Mutex<ConnectionManager>,
}

impl RedisCache {
    pub async fn connect(redis_url: &str) -> Result<Arc<Self>, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|err| AppError::cache(format!("Unable to connect to Redis: {err}")))?;

        Ok(Arc::new(Self {
            conn: Mutex::new(manager),
        }))
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let mut conn = self.conn.lock().await;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|err| AppError::cache(format!("SET {key} failed: {err}")))
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let mut conn = self.conn.lock().await;
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|err| AppError::cache(format!("GET {key} failed: {err}")))
    }
}

/// In-process store for tests and for runs without Redis.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: DashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }
}
