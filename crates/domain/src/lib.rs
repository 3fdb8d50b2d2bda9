//! # Holocron ドメイン層
//!
//! お気に入りカタログのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（User, Person, Planet, Favorite）
//! - **値オブジェクト**: 生成時に検証される不変オブジェクト（PersonName, Email など）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザー
//! - [`person`] - 人物（people）
//! - [`planet`] - 惑星
//! - [`favorite`] - お気に入り（ユーザーと人物/惑星の関連）
//! - [`password`] - パスワード関連の値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use holocron_domain::{
//!     favorite::FavoriteTarget,
//!     person::{PersonId, PersonName},
//! };
//!
//! let name = PersonName::new("Luke Skywalker")?;
//! assert_eq!(name.as_str(), "Luke Skywalker");
//!
//! let target = FavoriteTarget::Person(PersonId::from_i64(1));
//! assert_eq!(target.person_id(), Some(PersonId::from_i64(1)));
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod favorite;
pub mod password;
pub mod person;
pub mod planet;
pub mod user;

pub use error::DomainError;
