/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ProbeError を統一的に変換。詳細はログのみ、クライアントには固定文言
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::probe::ProbeError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database unavailable")]
    DbUnavailable(#[from] ProbeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::DbUnavailable(e) => {
                tracing::error!(error = %e, "database connection failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to connect to database",
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
