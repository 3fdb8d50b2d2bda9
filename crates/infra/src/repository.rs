//! # リポジトリ実装
//!
//! エンティティごとのリポジトリトレイトと、その SQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **エンティティ単位のトレイト**: ハンドラ・ユースケースは必要なトレイトだけを
//!   `Arc<dyn Trait>` として受け取る
//! - **バックエンド非依存**: `sqlx::Any` で PostgreSQL / SQLite の両方に対応する。
//!   プレースホルダは両方が解釈できる `$N` 形式を使う
//! - **テスタビリティ**: トレイト経由でモック可能（`mock` モジュール参照）

pub mod favorite_repository;
pub mod person_repository;
pub mod planet_repository;
pub mod user_repository;

pub use favorite_repository::{FavoriteRepository, SqlFavoriteRepository};
pub use person_repository::{PersonRepository, SqlPersonRepository};
pub use planet_repository::{PlanetRepository, SqlPlanetRepository};
pub use user_repository::{SqlUserRepository, UserRepository};
