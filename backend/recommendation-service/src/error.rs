/// Error types for the Recommendation Service
///
/// The recommendation core itself has no error cases; everything here
/// belongs to the HTTP boundary. Client errors keep the terse
/// `{"error": ...}` shape, while upstream failures get a structured
/// diagnostic body whose details are suppressed in production builds.
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use chrono::Utc;
use graphy_client::GraphyError;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The LMS was reachable but answered with an error.
    #[error("Upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
        content_type: Option<String>,
        snippet: Option<String>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

fn is_production() -> bool {
    std::env::var("APP_ENV")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                HttpResponse::build(self.status_code()).json(json!({ "error": msg }))
            }
            AppError::Upstream {
                message,
                status,
                content_type,
                snippet,
            } => {
                let mut body = json!({
                    "error": "Failed to fetch learner data",
                    "message": message,
                    "timestamp": Utc::now().to_rfc3339(),
                    "requestId": Uuid::new_v4().to_string(),
                });
                if !is_production() {
                    body["details"] = json!({
                        "upstreamStatus": status,
                        "upstreamContentType": content_type,
                        "upstreamBodySnippet": snippet,
                    });
                }
                HttpResponse::InternalServerError().json(body)
            }
            AppError::Internal(msg) => {
                let mut body = json!({
                    "error": "Internal server error",
                    "message": "An unexpected error occurred",
                    "timestamp": Utc::now().to_rfc3339(),
                    "requestId": Uuid::new_v4().to_string(),
                });
                if !is_production() {
                    body["details"] = json!(msg);
                }
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

impl From<GraphyError> for AppError {
    fn from(err: GraphyError) -> Self {
        match err {
            GraphyError::Upstream {
                status,
                content_type,
                snippet,
            } => AppError::Upstream {
                message: "The learning platform API returned an error".to_string(),
                status: Some(status),
                content_type,
                snippet: Some(snippet),
            },
            GraphyError::NotConfigured => {
                AppError::Internal("Graphy API credentials are not configured".to_string())
            }
            other => AppError::Upstream {
                message: other.to_string(),
                status: None,
                content_type: None,
                snippet: None,
            },
        }
    }
}
