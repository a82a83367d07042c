use crate::error::{ApiError, ErrorResponse};
use crate::handlers::decode_movie_input;
use crate::models::{MovieInput, MovieResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /movies handler - Create a movie
///
/// The store assigns the id; an `id` sent in the body is ignored.
#[utoipa::path(
    post,
    path = routes::MOVIES,
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Invalid body, missing field or store failure", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let input = decode_movie_input(body)?;

    let movie = state
        .store
        .create_movie(input)
        .await
        .map_err(ApiError::StoreFailure)?;

    tracing::info!("Successfully created movie with id: {}", movie.id);
    Ok((StatusCode::CREATED, Json(MovieResponse { movie })))
}
