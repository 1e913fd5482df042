/*
 * Responsibility
 * - GET / (疎通用)
 * - 入力なし、失敗しない。ヘッダ/クエリ/ボディは見ない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn home() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"message": "Flask App Running in Kubernetes!"})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn home_returns_200_with_fixed_message() {
        let response = home().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({"message": "Flask App Running in Kubernetes!"}));
    }
}
