//! Movie persistence behind a single async trait.
//!
//! Handlers only ever see `Arc<dyn MovieStore>`, so the Redis-backed store and
//! the in-memory store are interchangeable.

pub mod memory;
pub mod redis_store;

pub use memory::InMemoryMovieStore;
pub use redis_store::RedisMovieStore;

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{Config, StoreBackend};
use crate::models::{Movie, MovieInput};

/// Failure kinds surfaced by a `MovieStore`
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("movie with id {0} not found")]
    NotFound(String),

    #[error("failed to (de)serialize movie: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store backend error: {0}")]
    Backend(#[from] ::redis::RedisError),

    #[error("generated id {0} is already in use")]
    IdCollision(String),
}

/// CRUD operations on movie records keyed by id
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Store a new movie under a freshly generated id and return it
    async fn create_movie(&self, input: MovieInput) -> Result<Movie, StoreError>;

    /// Fetch a single movie, `StoreError::NotFound` if absent
    async fn get_movie(&self, id: &str) -> Result<Movie, StoreError>;

    /// Fetch every stored movie, in no particular order
    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Overwrite an existing movie at `movie.id`
    ///
    /// Never creates a record: an unknown id yields `StoreError::NotFound`.
    async fn update_movie(&self, movie: Movie) -> Result<Movie, StoreError>;

    /// Remove a movie. Removing an unknown id is not an error.
    async fn delete_movie(&self, id: &str) -> Result<(), StoreError>;

    /// Verify the backend is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Generate a new movie identifier
pub fn new_movie_id() -> String {
    Uuid::new_v4().to_string()
}

/// Build the store selected by configuration
pub async fn from_config(config: &Config) -> anyhow::Result<Arc<dyn MovieStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisMovieStore::from_config(config).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory movie store; data is lost on restart");
            Ok(Arc::new(InMemoryMovieStore::new()))
        }
    }
}
