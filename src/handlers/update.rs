use crate::error::{ApiError, ErrorResponse};
use crate::handlers::decode_movie_input;
use crate::models::{MovieInput, MovieResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// PUT /movies/:id handler - Replace a movie's title and description
///
/// The existing record is looked up before the body is decoded, so an unknown
/// id answers 404 even when the body is malformed. The stored id is kept; any
/// `id` in the body is ignored.
#[utoipa::path(
    put,
    path = routes::MOVIE_ITEM,
    params(
        ("id" = String, Path, description = "Movie id assigned at creation")
    ),
    request_body = MovieInput,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, description = "Invalid body or missing field", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Store failure while persisting", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let mut movie = state
        .store
        .get_movie(&id)
        .await
        .map_err(ApiError::MovieNotFound)?;

    let input = decode_movie_input(body)?;
    movie.title = input.title;
    movie.description = input.description;

    let movie = state
        .store
        .update_movie(movie)
        .await
        .map_err(ApiError::UpdateFailed)?;

    tracing::info!("Successfully updated movie with id: {}", movie.id);
    Ok((StatusCode::OK, Json(MovieResponse { movie })))
}
