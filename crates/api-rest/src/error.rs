//! Engine error → HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docshelf_store::DocumentError;

/// Wrapper turning a [`DocumentError`] into an HTTP response.
///
/// User-facing errors carry their message to the client; everything else is
/// an internal fault, logged and reported as a bare 500 so no storage detail
/// leaks across the boundary.
#[derive(Debug)]
pub struct ApiError(DocumentError);

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DocumentError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            DocumentError::InvalidName(_)
            | DocumentError::AlreadyExists(_)
            | DocumentError::TrashPathFormat(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            _ => {
                tracing::error!("document operation failed: {:?}", self.0);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
            }
        };
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn status_of(err: DocumentError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn user_errors_map_to_client_statuses() {
        assert_eq!(
            status_of(DocumentError::NotFound(Uuid::new_v4())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DocumentError::InvalidName("a/b".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DocumentError::AlreadyExists("a/report.txt".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = DocumentError::FileRead(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
