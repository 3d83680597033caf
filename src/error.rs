use crate::api::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Failure kinds surfaced by the recipe endpoints. The legacy front-end
/// expects every failure as a 400 with a message body, so all variants map
/// to BAD_REQUEST.
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Bad request")]
    Validation,

    #[error("Title exists")]
    DuplicateTitle,

    #[error("{0}")]
    Store(diesel::result::Error),
}

impl From<diesel::result::Error> for RecipeError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RecipeError::DuplicateTitle
            }
            other => RecipeError::Store(other),
        }
    }
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        if let RecipeError::Store(ref e) = self {
            tracing::error!("store failure: {}", e);
        }
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violations_become_duplicate_title() {
        let e = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        );
        assert!(matches!(RecipeError::from(e), RecipeError::DuplicateTitle));
    }

    #[test]
    fn other_store_errors_keep_their_message() {
        let e = RecipeError::from(diesel::result::Error::NotFound);
        assert!(matches!(e, RecipeError::Store(_)));
        assert_eq!(e.to_string(), diesel::result::Error::NotFound.to_string());
    }
}
