use crate::error::{ApiError, ErrorResponse};
use crate::models::MovieResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /movies/:id handler - Retrieve a single movie
#[utoipa::path(
    get,
    path = routes::MOVIE_ITEM,
    params(
        ("id" = String, Path, description = "Movie id assigned at creation")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let movie = state
        .store
        .get_movie(&id)
        .await
        .map_err(ApiError::MovieNotFound)?;

    tracing::info!("Successfully retrieved movie with id: {}", id);
    Ok((StatusCode::OK, Json(MovieResponse { movie })))
}
