pub mod health;
pub mod create;
pub mod get;
pub mod list;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use create::create_handler;
pub use get::get_handler;
pub use list::list_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::error::ApiError;
use crate::models::MovieInput;
use axum::{extract::rejection::JsonRejection, Json};

/// Unwrap a JSON body and enforce the required movie fields
fn decode_movie_input(
    body: Result<Json<MovieInput>, JsonRejection>,
) -> Result<MovieInput, ApiError> {
    let Json(input) = body?;
    input.validate().map_err(ApiError::InvalidBody)?;
    Ok(input)
}
