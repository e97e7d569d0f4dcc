//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::QueryError;
use blog_core::lookup::MAX_POST_ID;
use blog_core::query::MAX_PAGINATION_VALUE;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound {
        detail: String,
        requested_id: Option<u64>,
    },
    BadRequest(String),
    InvalidPagination(Vec<String>),
    ValueTooLarge(String),
    InvalidId(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { detail, .. } => write!(f, "Not found: {}", detail),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InvalidPagination(details) => {
                write!(f, "Invalid pagination parameters: {}", details.join(", "))
            }
            AppError::ValueTooLarge(msg) => write!(f, "Value too large: {}", msg),
            AppError::InvalidId(raw) => write!(f, "Invalid id: {}", raw),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::InvalidPagination(_)
            | AppError::ValueTooLarge(_)
            | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code().as_u16();
        let error = match self {
            AppError::NotFound {
                detail,
                requested_id,
            } => {
                let error = ErrorResponse::not_found(detail);
                match requested_id {
                    Some(id) => error.with_requested_id(*id),
                    None => error,
                }
            }
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::InvalidPagination(details) => {
                ErrorResponse::new(status, "Invalid Pagination Parameters")
                    .with_detail("invalid pagination parameters")
                    .with_details(details.clone())
            }
            AppError::ValueTooLarge(detail) => {
                ErrorResponse::new(status, "Value Too Large").with_detail(detail)
            }
            AppError::InvalidId(raw) => ErrorResponse::new(status, "Invalid Post ID")
                .with_detail(format!("'{}' is not a valid post id", raw)),
            AppError::Internal(detail) => {
                // Logged here, never sent to the client
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        if err.is_client_error() {
            tracing::debug!(error = %err, "Rejected request");
        }
        match err {
            QueryError::InvalidPagination { details } => AppError::InvalidPagination(details),
            QueryError::PaginationTooLarge => AppError::ValueTooLarge(format!(
                "pagination values too large: page and limit must not exceed {}",
                MAX_PAGINATION_VALUE
            )),
            QueryError::KeywordTooShort => {
                AppError::BadRequest(QueryError::KeywordTooShort.to_string())
            }
            QueryError::InvalidId(raw) => AppError::InvalidId(raw),
            QueryError::IdTooLarge(_) => AppError::ValueTooLarge(format!(
                "post id must not exceed {}",
                MAX_POST_ID
            )),
            QueryError::NotFound { requested_id } => AppError::NotFound {
                detail: format!("Post with id {} not found", requested_id),
                requested_id: Some(requested_id),
            },
            QueryError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
