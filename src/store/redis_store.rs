use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Script};

use super::{new_movie_id, MovieStore, StoreError};
use crate::config::Config;
use crate::models::{Movie, MovieInput};

/// Writes ARGV[2] into field ARGV[1] of hash KEYS[1] only when the field
/// already exists. Returns 1 on write, 0 otherwise.
const UPDATE_IF_EXISTS: &str = r"
if redis.call('HEXISTS', KEYS[1], ARGV[1]) == 1 then
    redis.call('HSET', KEYS[1], ARGV[1], ARGV[2])
    return 1
end
return 0
";

/// Movie store backed by a single Redis hash
///
/// Every movie lives in the hash named by `movies_key`, with the movie id as
/// the field and the JSON-encoded record as the value. All operations touch a
/// single field, so Redis' per-command atomicity is the only consistency
/// guarantee needed.
pub struct RedisMovieStore {
    conn: ConnectionManager,
    movies_key: String,
    update_script: Script,
}

impl RedisMovieStore {
    /// Connect to Redis using the configured address and database index
    ///
    /// The underlying `ConnectionManager` multiplexes one connection across
    /// all handlers and reconnects on its own after a dropped connection.
    pub async fn from_config(config: &Config) -> Result<Self> {
        tracing::info!(
            "Connecting to Redis at: {} (db {})",
            config.redis_addr,
            config.redis_db
        );

        let client = redis::Client::open(config.redis_url().as_str())
            .context("Failed to parse Redis connection URL")?;

        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to Redis")?;

        tracing::info!(
            "Successfully connected to Redis, movies stored in hash: {}",
            config.movies_key
        );

        Ok(Self {
            conn,
            movies_key: config.movies_key.clone(),
            update_script: Script::new(UPDATE_IF_EXISTS),
        })
    }
}

#[async_trait]
impl MovieStore for RedisMovieStore {
    async fn create_movie(&self, input: MovieInput) -> Result<Movie, StoreError> {
        let movie = Movie {
            id: new_movie_id(),
            title: input.title,
            description: input.description,
        };
        let payload = serde_json::to_string(&movie)?;

        let mut conn = self.conn.clone();
        let inserted: bool = conn.hset_nx(&self.movies_key, &movie.id, payload).await?;
        if !inserted {
            return Err(StoreError::IdCollision(movie.id));
        }

        tracing::debug!("Created movie with id: {}", movie.id);
        Ok(movie)
    }

    async fn get_movie(&self, id: &str) -> Result<Movie, StoreError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn.hget(&self.movies_key, id).await?;

        match payload {
            Some(payload) => {
                let movie: Movie = serde_json::from_str(&payload)?;
                tracing::debug!("Read movie with id: {}", id);
                Ok(movie)
            }
            None => {
                tracing::debug!("Movie not found with id: {}", id);
                Err(StoreError::NotFound(id.to_string()))
            }
        }
    }

    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let mut conn = self.conn.clone();
        let payloads: Vec<String> = conn.hvals(&self.movies_key).await?;

        let movies = payloads
            .iter()
            .map(|payload| serde_json::from_str::<Movie>(payload))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Listed {} movies", movies.len());
        Ok(movies)
    }

    async fn update_movie(&self, movie: Movie) -> Result<Movie, StoreError> {
        let payload = serde_json::to_string(&movie)?;

        let mut conn = self.conn.clone();
        let written: i64 = self
            .update_script
            .key(&self.movies_key)
            .arg(&movie.id)
            .arg(payload)
            .invoke_async(&mut conn)
            .await?;

        if written == 0 {
            tracing::debug!("Refusing to update unknown movie id: {}", movie.id);
            return Err(StoreError::NotFound(movie.id));
        }

        tracing::debug!("Updated movie with id: {}", movie.id);
        Ok(movie)
    }

    async fn delete_movie(&self, id: &str) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.hdel(&self.movies_key, id).await?;

        tracing::debug!("Deleted movie with id: {} (removed {} entries)", id, removed);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING").query_async(&mut conn).await?;
        tracing::debug!("Redis replied to PING with: {}", reply);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreBackend;

    /// Connect to a live Redis under a throwaway hash key.
    ///
    /// Targets `REDIS_TEST_ADDR`, falling back to `localhost:6379`. Tests using
    /// this are ignored by default; run them with `cargo test -- --ignored`.
    async fn connect_test_store() -> RedisMovieStore {
        let config = Config {
            store_backend: StoreBackend::Redis,
            redis_addr: std::env::var("REDIS_TEST_ADDR")
                .unwrap_or_else(|_| "localhost:6379".to_string()),
            redis_db: 0,
            movies_key: format!("movies-test-{}", new_movie_id()),
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        };

        RedisMovieStore::from_config(&config)
            .await
            .expect("Failed to connect to Redis test server")
    }

    async fn drop_test_hash(store: &RedisMovieStore) {
        let mut conn = store.conn.clone();
        let _: i64 = conn.del(&store.movies_key).await.unwrap();
    }

    fn dune() -> MovieInput {
        MovieInput {
            title: "Dune".to_string(),
            description: "Sci-fi epic".to_string(),
        }
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RedisMovieStore>();
    }

    #[tokio::test]
    async fn test_connection_error_has_context() {
        let config = Config {
            store_backend: StoreBackend::Redis,
            redis_addr: "127.0.0.1:1".to_string(),
            redis_db: 0,
            movies_key: "movies".to_string(),
            service_port: 5000,
            service_host: "0.0.0.0".to_string(),
        };

        let result = RedisMovieStore::from_config(&config).await;
        match result {
            Ok(_) => panic!("Nothing should be listening on port 1"),
            Err(e) => assert!(
                e.to_string().contains("Failed to connect to Redis"),
                "Error should have context: {}",
                e
            ),
        }
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_create_and_get() {
        let store = connect_test_store().await;

        let created = store.create_movie(dune()).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.title, "Dune");

        let fetched = store.get_movie(&created.id).await.unwrap();
        assert_eq!(fetched, created);

        drop_test_hash(&store).await;
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_get_unknown_id() {
        let store = connect_test_store().await;

        let result = store.get_movie("does-not-exist").await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "does-not-exist"));
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_update_existing_and_unknown() {
        let store = connect_test_store().await;

        let created = store.create_movie(dune()).await.unwrap();
        let changed = Movie {
            title: "Dune: Part Two".to_string(),
            ..created.clone()
        };
        let updated = store.update_movie(changed.clone()).await.unwrap();
        assert_eq!(updated, changed);
        assert_eq!(store.get_movie(&created.id).await.unwrap(), changed);

        let ghost = Movie {
            id: "ghost".to_string(),
            ..changed
        };
        let result = store.update_movie(ghost).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.get_movie("ghost").await,
            Err(StoreError::NotFound(_))
        ));

        drop_test_hash(&store).await;
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_list_and_delete() {
        let store = connect_test_store().await;

        let first = store.create_movie(dune()).await.unwrap();
        let second = store
            .create_movie(MovieInput {
                title: "Arrival".to_string(),
                description: "First contact".to_string(),
            })
            .await
            .unwrap();

        let mut ids: Vec<String> = store
            .get_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        ids.sort();
        let mut expected = vec![first.id.clone(), second.id.clone()];
        expected.sort();
        assert_eq!(ids, expected);

        store.delete_movie(&first.id).await.unwrap();
        assert!(matches!(
            store.get_movie(&first.id).await,
            Err(StoreError::NotFound(_))
        ));
        // Deleting again is not an error
        store.delete_movie(&first.id).await.unwrap();
        assert_eq!(store.get_movies().await.unwrap().len(), 1);

        drop_test_hash(&store).await;
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_corrupt_entry_is_serialization_error() {
        let store = connect_test_store().await;

        let mut conn = store.conn.clone();
        let _: i64 = conn
            .hset(&store.movies_key, "broken", "{not json")
            .await
            .unwrap();

        assert!(matches!(
            store.get_movie("broken").await,
            Err(StoreError::Serialization(_))
        ));
        assert!(matches!(
            store.get_movies().await,
            Err(StoreError::Serialization(_))
        ));

        drop_test_hash(&store).await;
    }

    #[tokio::test]
    #[ignore = "requires a running Redis server"]
    async fn test_ping() {
        let store = connect_test_store().await;

        store.ping().await.unwrap();
    }
}
