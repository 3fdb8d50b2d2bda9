//! # ユースケース層
//!
//! 入力検証と参照整合性チェックを伴う操作を実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは DTO の変換に専念し、検証と存在チェックはここに集約
//! - **エラーメッセージ**: クライアントに返す文言はユースケースが決める

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;

pub use favorite::FavoriteUseCaseImpl;
use holocron_domain::DomainError;
pub use person::PersonUseCaseImpl;
pub use planet::PlanetUseCaseImpl;
pub use user::UserUseCaseImpl;

use crate::error::CoreError;

/// 名前が未指定・空のときのメッセージ（人物・惑星で共通）
pub(crate) const REQUIRED_FIELDS: &str = "Todos los campos son requeridos";

/// 必須の文字列フィールドを値オブジェクトに変換する
///
/// 未指定または空白のみの場合は `missing_message` の 400 を返す。
/// それ以外の検証エラーは値オブジェクトのメッセージで 400 を返す。
pub(crate) fn parse_required<T>(
    value: Option<String>,
    missing_message: &str,
    parse: impl FnOnce(String) -> Result<T, DomainError>,
) -> Result<T, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(parse(v)?),
        _ => Err(CoreError::BadRequest(missing_message.to_string())),
    }
}
