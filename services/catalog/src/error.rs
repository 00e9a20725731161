use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::validator::ValidationError;

/// Stable failure codes surfaced to callers as `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    RowDoesNotExist,
    RowAlreadyDeleted,
    RateNotMatched,
    InvalidRequest,
    Forbidden,
    /// A write that was validated beforehand returned nothing.
    InternalServer,
    /// Storage failure.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RowDoesNotExist => "ROW_DOES_NOT_EXIST",
            Self::RowAlreadyDeleted => "ROW_ALREADY_DELETED",
            Self::RateNotMatched => "RATE_NOT_MATCHED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Forbidden => "FORBIDDEN",
            Self::InternalServer => "INTERNAL_SERVER",
            Self::Internal => "INTERNAL",
        }
    }

    pub fn number(self) -> u32 {
        match self {
            Self::RowDoesNotExist => 40000,
            Self::RowAlreadyDeleted => 40004,
            Self::RateNotMatched => 40005,
            Self::InvalidRequest => 40006,
            Self::Forbidden => 40300,
            Self::InternalServer => 50000,
            Self::Internal => 50001,
        }
    }

    fn status(self) -> StatusCode {
        match self {
            Self::RowDoesNotExist => StatusCode::NOT_FOUND,
            Self::RowAlreadyDeleted | Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::RateNotMatched | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InternalServer | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Catalog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("no such {domain} {id}")]
    RowDoesNotExist { domain: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("forbidden")]
    Forbidden,
    #[error("{0}")]
    InvariantViolated(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn not_found(domain: &'static str, id: impl ToString) -> Self {
        Self::RowDoesNotExist {
            domain,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RowDoesNotExist { .. } => ErrorCode::RowDoesNotExist,
            Self::Validation(e) => e.code,
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::Forbidden => ErrorCode::Forbidden,
            Self::InvariantViolated(_) => ErrorCode::InternalServer,
            Self::Internal(_) => ErrorCode::Internal,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.code().as_str()
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let code = self.code();
        match &self {
            Self::InvariantViolated(message) => {
                tracing::error!(
                    kind = code.as_str(),
                    alert = "invariant_violation",
                    "{message}"
                );
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = code.as_str(), "internal error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": code.as_str(),
            "code": code.number(),
            "message": self.to_string(),
        });
        (code.status(), axum::Json(body)).into_response()
    }
}
