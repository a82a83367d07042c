use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{MessageResponse, Movie, MovieInput, MovieResponse, MoviesResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "movie-cache-api",
        version = "0.1.0",
        description = "CRUD service for movies backed by a Redis hash"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::list::list_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Movie,
            MovieInput,
            MovieResponse,
            MoviesResponse,
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "movies", description = "Movie CRUD operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{send, setup_test_app};
    use axum::http::StatusCode;

    #[test]
    fn test_openapi_lists_all_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/health"));
        assert!(paths.iter().any(|p| p.as_str() == "/movies"));
        assert!(paths.iter().any(|p| p.as_str() == "/movies/{id}"));
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let app = setup_test_app();

        let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["info"]["title"], "movie-cache-api");
        assert!(body["paths"]["/movies/{id}"]["put"].is_object());
        assert!(body["paths"]["/movies/{id}"]["delete"].is_object());
    }
}
