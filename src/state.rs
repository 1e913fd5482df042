/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - 接続文字列は起動時に一度だけ読み、以後 read-only
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub database_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            database_url: Arc::from(config.database_url.as_str()),
        }
    }
}
