use std::env;
use std::str::FromStr;
use anyhow::{anyhow, Context, Result};

/// Which `MovieStore` implementation the service runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "redis" => Ok(StoreBackend::Redis),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow!("expected 'redis' or 'memory', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub redis_addr: String,
    pub redis_db: i64,
    pub movies_key: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = env::var("MOVIE_STORE")
            .unwrap_or_else(|_| "redis".to_string())
            .parse::<StoreBackend>()
            .context("MOVIE_STORE must be 'redis' or 'memory'")?;

        let redis_addr = env::var("REDIS_ADDR")
            .unwrap_or_else(|_| "localhost:6379".to_string());

        let redis_db: i64 = env::var("REDIS_DB")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u32>()
            .context("REDIS_DB must be a non-negative database index")?
            .into();

        let movies_key = env::var("MOVIES_KEY")
            .unwrap_or_else(|_| "movies".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            store_backend,
            redis_addr,
            redis_db,
            movies_key,
            service_port,
            service_host,
        })
    }

    /// Connection URL for the configured Redis address and database
    pub fn redis_url(&self) -> String {
        format!("redis://{}/{}", self.redis_addr, self.redis_db)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Movie store: {:?}", self.store_backend);
        if self.store_backend == StoreBackend::Redis {
            tracing::info!("  Redis address: {}", self.redis_addr);
            tracing::info!("  Redis database: {}", self.redis_db);
            tracing::info!("  Movies hash key: {}", self.movies_key);
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
