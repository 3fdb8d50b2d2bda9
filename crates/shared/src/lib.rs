//! # Holocron 共有ユーティリティ
//!
//! API サービスと各クレートで共通利用するレスポンス型と観測基盤を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換はサービス側の責務）
//! - トレーシング関連は `observability` feature の背後に置く

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, MessageResponse, SuccessResponse};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
