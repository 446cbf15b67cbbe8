//! Terminal error handling.
//!
//! Every failure a handler does not classify locally converges here:
//! `ApiError` is the single point that turns a raised failure into an HTTP
//! response with a `{message}` JSON body. Application-raised typed failures
//! carry their status; anything else is a 500.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use memoranda_core::Error;

/// Violation message for a request body that could not be parsed as JSON.
pub const INVALID_JSON: &str = "Invalid JSON input!";

/// Fallback message for errors that carry no usable text.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

#[derive(Debug)]
pub enum ApiError {
    /// Input-shape violation classified at the controller boundary.
    BadRequest(String),
    /// Service-raised absence of a record; message is operation-specific.
    NotFound(String),
    /// Everything else: store failures reaching the terminal handler.
    Internal(Error),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl ApiError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for this failure.
    ///
    /// Typed failures surface their message verbatim; store-level failures
    /// are normalized by the `Error` display (joined validation messages,
    /// cast/duplicate phrasing), with a generic fallback when nothing
    /// usable remains.
    pub fn message(&self) -> String {
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg.clone(),
            ApiError::Internal(err) => err.to_string(),
        };
        if message.is_empty() {
            SOMETHING_WENT_WRONG.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = Json(serde_json::json!({
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404_with_verbatim_message() {
        let err = ApiError::from(Error::NotFound("Note not found!".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Note not found!");
    }

    #[test]
    fn test_invalid_input_maps_to_400_with_verbatim_message() {
        let err = ApiError::from(Error::InvalidInput(
            "Id must be a valid MongooseDB ObjectId!".to_string(),
        ));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Id must be a valid MongooseDB ObjectId!");
    }

    #[test]
    fn test_store_validation_maps_to_500_with_joined_messages() {
        let err = ApiError::from(Error::Validation(vec![
            "Note title should be at least 3 characters long!".to_string(),
            "Note content should be at least 3 characters long!".to_string(),
        ]));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.message(),
            "Note title should be at least 3 characters long!, \
             Note content should be at least 3 characters long!"
        );
    }

    #[test]
    fn test_cast_maps_to_500_with_fixed_message() {
        let err = ApiError::from(Error::Cast);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Missing or invalid data!");
    }

    #[test]
    fn test_duplicate_maps_to_500_with_field_and_value() {
        let err = ApiError::from(Error::Duplicate {
            field: "title".to_string(),
            value: "Groceries".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Duplicate title: \"Groceries\" already exists!");
    }

    #[test]
    fn test_unknown_maps_to_500_with_unknown_message() {
        let err = ApiError::from(Error::Unknown);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Unknown error!");
    }

    #[test]
    fn test_empty_message_falls_back_to_generic_text() {
        let err = ApiError::from(Error::Validation(Vec::new()));
        assert_eq!(err.message(), SOMETHING_WENT_WRONG);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let err = ApiError::from(Error::Database(sqlx::Error::PoolClosed));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("Database error:"));
    }
}
