//! # インフラ層エラー定義
//!
//! [`InfraError`] は発生箇所のスパン（どのリポジトリメソッドの中か）を
//! [`SpanTrace`] として抱えたまま API 層まで運ばれ、500 応答時のログに出力される。
//! 種別ごとの分岐は [`InfraError::kind`] で行う。
//!
//! スパンの取得はすべて [`InfraError::new`] を経由するため、`?` による変換でも
//! 自動的に記録される。

use derive_more::Display;
use holocron_domain::DomainError;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Debug, Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// [`InfraError`] の種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// クエリ実行・接続・制約違反
    #[error("データベースエラー: {0}")]
    Database(#[source] sqlx::Error),

    /// 起動時のスキーマ適用の失敗
    #[error("マイグレーションエラー: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),

    /// 読み出した行がドメインの不変条件を満たさない
    #[error("不正な永続化データ: {0}")]
    Corrupted(#[source] DomainError),

    #[error("パスワードハッシュエラー: {0}")]
    PasswordHash(String),

    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// 現在のスパンを記録してエラーを作る
    pub fn new(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn password_hash(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::PasswordHash(msg.into()))
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::new(InfraErrorKind::Unexpected(msg.into()))
    }

    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<sqlx::Error> for InfraError {
    fn from(e: sqlx::Error) -> Self {
        Self::new(InfraErrorKind::Database(e))
    }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::new(InfraErrorKind::Migration(e))
    }
}

impl From<DomainError> for InfraError {
    fn from(e: DomainError) -> Self {
        Self::new(InfraErrorKind::Corrupted(e))
    }
}
