//! # レスポンスボディ
//!
//! ハンドラが返す単一フィールドの JSON ボディを提供する。
//!
//! | 型 | JSON | 用途 |
//! |---|------|------|
//! | [`ErrorResponse`] | `{"error": "..."}` | 入力検証・存在チェックの失敗 |
//! | [`MessageResponse`] | `{"message": "..."}` | 処理結果の通知、ステータス付きアプリケーションエラー |
//! | [`SuccessResponse`] | `{"success": "..."}` | 削除完了の通知 |
//!
//! - 純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - ステータスコードとの組み合わせは各ハンドラの責務

use serde::{Deserialize, Serialize};

/// エラーレスポンス `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// メッセージレスポンス `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 500 Internal Server Error 用の固定メッセージ
    ///
    /// 内部情報は含めない。
    pub fn internal_error() -> Self {
        Self::new("Error interno del servidor")
    }
}

/// 成功レスポンス `{"success": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: String,
}

impl SuccessResponse {
    pub fn new(success: impl Into<String>) -> Self {
        Self {
            success: success.into(),
        }
    }
}
