use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{new_movie_id, MovieStore, StoreError};
use crate::models::{Movie, MovieInput};

/// Process-local movie store
///
/// Backs the handler tests and `MOVIE_STORE=memory` runs. Nothing is persisted.
#[derive(Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<HashMap<String, Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn create_movie(&self, input: MovieInput) -> Result<Movie, StoreError> {
        let id = new_movie_id();
        let mut movies = self.movies.write().await;

        match movies.entry(id) {
            Entry::Occupied(entry) => Err(StoreError::IdCollision(entry.key().clone())),
            Entry::Vacant(entry) => {
                let movie = Movie {
                    id: entry.key().clone(),
                    title: input.title,
                    description: input.description,
                };
                entry.insert(movie.clone());
                tracing::debug!("Created movie with id: {}", movie.id);
                Ok(movie)
            }
        }
    }

    async fn get_movie(&self, id: &str) -> Result<Movie, StoreError> {
        self.movies
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.read().await.values().cloned().collect())
    }

    async fn update_movie(&self, movie: Movie) -> Result<Movie, StoreError> {
        let mut movies = self.movies.write().await;
        match movies.get_mut(&movie.id) {
            Some(existing) => {
                *existing = movie.clone();
                tracing::debug!("Updated movie with id: {}", movie.id);
                Ok(movie)
            }
            None => Err(StoreError::NotFound(movie.id)),
        }
    }

    async fn delete_movie(&self, id: &str) -> Result<(), StoreError> {
        let removed = self.movies.write().await.remove(id);
        tracing::debug!("Deleted movie with id: {} (existed: {})", id, removed.is_some());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
