use crate::error::{ApiError, ErrorResponse};
use crate::models::MoviesResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /movies handler - List every stored movie
///
/// No ordering is guaranteed and no pagination is applied.
#[utoipa::path(
    get,
    path = routes::MOVIES,
    responses(
        (status = 200, description = "All movies", body = MoviesResponse),
        (status = 400, description = "Store failure", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<MoviesResponse>), ApiError> {
    let movies = state
        .store
        .get_movies()
        .await
        .map_err(ApiError::StoreFailure)?;

    tracing::info!("Listed {} movies", movies.len());
    Ok((StatusCode::OK, Json(MoviesResponse { movies })))
}
