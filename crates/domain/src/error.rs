//! # ドメイン層エラー定義
//!
//! ビジネスルール違反を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `Inconsistent` | 500 Internal Server Error | 永続化データが不変条件を満たさない |
//!
//! 「見つからない」はリポジトリが `Option` で表現するため、ここには含めない。

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// - 必須フィールドが空
    /// - 文字数制限の超過
    #[error("{0}")]
    Validation(String),

    /// 不変条件違反
    ///
    /// DB から復元したデータがドメインの不変条件を満たさない場合に使用する。
    /// 例: お気に入りが人物と惑星の両方（またはどちらも）を参照している。
    #[error("不変条件違反: {0}")]
    Inconsistent(String),
}
