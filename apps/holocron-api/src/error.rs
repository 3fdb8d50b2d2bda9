//! # API エラー定義
//!
//! API サーバー固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス | ボディ |
//! |-----------|-----------|--------|
//! | `BadRequest` | 400 | `{"error": ...}` |
//! | `NotFound` | 404 | `{"error": ...}` |
//! | `Api` | 任意 | `{"message": ...}` |
//! | `Database` / `Internal` | 500 | `{"message": "Error interno del servidor"}` |

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use holocron_domain::DomainError;
use holocron_infra::InfraError;
use holocron_shared::{ErrorResponse, MessageResponse};
use thiserror::Error;

/// API サーバーで発生するエラー
#[derive(Debug, Error)]
pub enum CoreError {
   /// 必須フィールドの欠落・不正な入力
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 参照先が存在しない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// ステータスコードを伴うアプリケーションエラー
   #[error("{message}")]
   Api { status: StatusCode, message: String },

   /// データストアのエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),

   /// 内部エラー
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl CoreError {
   /// `{"message": ...}` 形式の 404
   pub fn message_not_found(message: impl Into<String>) -> Self {
      Self::Api {
         status:  StatusCode::NOT_FOUND,
         message: message.into(),
      }
   }
}

impl From<DomainError> for CoreError {
   fn from(e: DomainError) -> Self {
      match e {
         DomainError::Validation(msg) => CoreError::BadRequest(msg),
         DomainError::Inconsistent(msg) => CoreError::Internal(msg),
      }
   }
}

impl IntoResponse for CoreError {
   fn into_response(self) -> Response {
      match self {
         CoreError::BadRequest(msg) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
         }
         CoreError::NotFound(msg) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(msg))).into_response()
         }
         CoreError::Api { status, message } => {
            (status, Json(MessageResponse::new(message))).into_response()
         }
         CoreError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            internal_error_response()
         }
         CoreError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            internal_error_response()
         }
      }
   }
}

fn internal_error_response() -> Response {
   (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(MessageResponse::internal_error()),
   )
      .into_response()
}

/// JSON ボディの抽出結果を DTO に変換する
///
/// - `Content-Type: application/json` がない（ボディなし）場合は空の DTO として扱い、
///   必須フィールドの検証に委ねる
/// - 構文エラー・型不一致は 400
pub fn json_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> Result<T, CoreError> {
   match payload {
      Ok(Json(body)) => Ok(body),
      Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
      Err(rejection) => Err(CoreError::BadRequest(rejection.body_text())),
   }
}
