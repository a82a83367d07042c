use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /movies/:id handler - Remove a movie
///
/// Deleting an id that does not exist still answers 200.
#[utoipa::path(
    delete,
    path = routes::MOVIE_ITEM,
    params(
        ("id" = String, Path, description = "Movie id assigned at creation")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 400, description = "Store failure", body = ErrorResponse)
    ),
    tag = "movies"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .store
        .delete_movie(&id)
        .await
        .map_err(ApiError::StoreFailure)?;

    tracing::info!("Successfully deleted movie with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: format!("movie with id {} deleted", id),
        }),
    ))
}
