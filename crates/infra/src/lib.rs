//! # Holocron インフラ層
//!
//! データストアとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! リポジトリトレイトとその SQL 実装を提供し、ストアの詳細をカプセル化する。
//! ハンドラやユースケースは `Arc<dyn XxxRepository>` として注入された
//! トレイトオブジェクトのみを扱い、グローバルなセッションには触れない。
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール管理とスキーマ適用（PostgreSQL / SQLite）
//! - [`error`] - インフラ層エラー定義
//! - [`password`] - パスワードハッシュ化
//! - [`repository`] - リポジトリトレイトと SQL 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use holocron_infra::{db, repository::SqlPersonRepository};
//!
//! async fn setup() -> Result<(), holocron_infra::InfraError> {
//!     let database_url = "sqlite::memory:";
//!     let pool = db::create_pool(database_url).await?;
//!     db::run_migrations(&pool, db::DatabaseBackend::from_url(database_url)?).await?;
//!
//!     let people = SqlPersonRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod password;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use password::{Argon2PasswordEncoder, PasswordEncoder};
