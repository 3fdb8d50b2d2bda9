//! # Holocron API ライブラリ
//!
//! お気に入りカタログ API のハンドラ・ユースケース・ルーター構築を公開する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;

#[cfg(test)]
pub(crate) mod test_utils;
