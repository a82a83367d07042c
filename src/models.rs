use serde::{Deserialize, Serialize};

/// A stored movie record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Request body for create and update operations
///
/// Any `id` present in the body is ignored; identifiers are assigned by the store.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct MovieInput {
    pub title: String,
    pub description: String,
}

impl MovieInput {
    /// Check that both required fields are present and non-empty
    ///
    /// Whitespace-only values count as present.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("field 'title' is required".to_string());
        }
        if self.description.is_empty() {
            return Err("field 'description' is required".to_string());
        }
        Ok(())
    }
}

/// Envelope for a single movie
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovieResponse {
    pub movie: Movie,
}

/// Envelope for the full movie collection
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoviesResponse {
    pub movies: Vec<Movie>,
}

/// Envelope for a plain confirmation message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_input() {
        let input = MovieInput {
            title: "Dune".to_string(),
            description: "Sci-fi epic".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let missing_title = MovieInput {
            title: String::new(),
            description: "Sci-fi epic".to_string(),
        };
        assert!(missing_title.validate().unwrap_err().contains("title"));

        let missing_description = MovieInput {
            title: "Dune".to_string(),
            description: String::new(),
        };
        assert!(missing_description.validate().unwrap_err().contains("description"));
    }

    #[test]
    fn test_validate_accepts_whitespace_only_fields() {
        let input = MovieInput {
            title: "   ".to_string(),
            description: " ".to_string(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_input_ignores_unknown_id() {
        let input: MovieInput = serde_json::from_value(serde_json::json!({
            "id": "client-chosen",
            "title": "Dune",
            "description": "Sci-fi epic"
        }))
        .unwrap();
        assert_eq!(input.title, "Dune");
        assert_eq!(input.description, "Sci-fi epic");
    }
}
