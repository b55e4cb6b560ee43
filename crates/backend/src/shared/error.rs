use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy for all CMS operations.
///
/// Validation / duplicate-slug / not-found are client-facing; infrastructure
/// failures map to a generic 500 without leaking the cause.
#[derive(Error, Debug)]
pub enum CmsError {
    #[error("{0}")]
    Validation(String),

    #[error("slug '{0}' is already in use")]
    DuplicateSlug(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Infrastructure(#[from] anyhow::Error),
}

impl CmsError {
    pub fn kind(&self) -> &'static str {
        match self {
            CmsError::Validation(_) => "VALIDATION",
            CmsError::DuplicateSlug(_) => "DUPLICATE_SLUG",
            CmsError::NotFound(_) => "NOT_FOUND",
            CmsError::Unauthorized => "UNAUTHORIZED",
            CmsError::Infrastructure(_) => "INFRASTRUCTURE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CmsError::Validation(_) => StatusCode::BAD_REQUEST,
            CmsError::DuplicateSlug(_) => StatusCode::CONFLICT,
            CmsError::NotFound(_) => StatusCode::NOT_FOUND,
            CmsError::Unauthorized => StatusCode::UNAUTHORIZED,
            CmsError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sea_orm::DbErr> for CmsError {
    fn from(err: sea_orm::DbErr) -> Self {
        CmsError::Infrastructure(err.into())
    }
}

impl From<serde_json::Error> for CmsError {
    fn from(err: serde_json::Error) -> Self {
        CmsError::Infrastructure(err.into())
    }
}

impl IntoResponse for CmsError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            CmsError::Infrastructure(cause) => {
                tracing::error!("infrastructure error: {:#}", cause);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "kind": self.kind(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CmsError::Validation("bad title".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CmsError::DuplicateSlug("home".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(CmsError::NotFound("page").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            CmsError::Infrastructure(anyhow::anyhow!("db down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kinds_are_machine_readable() {
        assert_eq!(CmsError::Validation("x".into()).kind(), "VALIDATION");
        assert_eq!(CmsError::DuplicateSlug("x".into()).kind(), "DUPLICATE_SLUG");
        assert_eq!(CmsError::NotFound("page").kind(), "NOT_FOUND");
    }
}
