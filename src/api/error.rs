// SPDX-License-Identifier: GPL-3.0-only
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::api::pages;
use crate::store::StoreError;

/// Failures that end a request with a generic error page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Details stay in the log, never in the page
        error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::error_page())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_store_fault_is_generic_500() {
        let response = AppError::from(StoreError::Database(sqlx::Error::PoolClosed)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Something went wrong"));
        assert!(!body.contains("pool"));
    }
}
