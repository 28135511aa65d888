// HTTP boundary errors
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build dashboard: {0}")]
    Dashboard(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Dashboard(source) => {
                tracing::error!("Failed to build dashboard: {:#}", source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Dashboard data is temporarily unavailable",
                )
            }
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_error_is_internal() {
        let error = ApiError::from(anyhow::anyhow!("connection refused"));
        assert!(error.to_string().contains("connection refused"));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
