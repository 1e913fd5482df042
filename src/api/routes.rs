/*
 * Responsibility
 * - URL 構造を定義 ("/" と "/db-test" の2本のみ)
 * - それ以外のパスは axum のデフォルト 404 に任せる
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{db_test::db_test, home::home};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/db-test", get(db_test))
}
