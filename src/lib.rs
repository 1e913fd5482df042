/*
 * Responsibility
 * - モジュール公開 (tests/ から Router を組めるように lib + bin 構成)
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod probe;
pub mod state;
