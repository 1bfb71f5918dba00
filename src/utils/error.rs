use actix_web::HttpResponse;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ValidationConflict(String),
    NotFound(String),
    Unauthorized(String),
    StorageUnavailable(String),
    DeliveryFailed(String),
    UpstreamUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationConflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::StorageUnavailable(msg) => write!(f, "Database error: {}", msg),
            AppError::DeliveryFailed(msg) => write!(f, "Email delivery failed: {}", msg),
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Maps the error taxonomy onto an HTTP response. Every handler that
    /// surfaces errors to the caller goes through here.
    pub fn to_response(&self) -> HttpResponse {
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });
        match self {
            AppError::ValidationConflict(_) => HttpResponse::BadRequest().json(body),
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::Unauthorized(_) => HttpResponse::Unauthorized().json(body),
            AppError::StorageUnavailable(_)
            | AppError::DeliveryFailed(_)
            | AppError::UpstreamUnavailable(_) => HttpResponse::InternalServerError().json(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::ValidationConflict("dup".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("user".into()), StatusCode::NOT_FOUND),
            (
                AppError::Unauthorized("bad password".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::StorageUnavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::DeliveryFailed("smtp".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::UpstreamUnavailable("timeout".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_response().status(), expected);
        }
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::DeliveryFailed("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }
}
