//! # UserRepository
//!
//! ユーザー（users テーブル）の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **作成と参照のみ**: API はユーザーの更新・削除を提供しないため、
//!   トレイトにもそのメソッドを持たない
//! - **is_active の読み出し**: BOOLEAN の表現が PostgreSQL と SQLite で異なるため、
//!   SELECT 時に整数へ正規化してから bool に戻す

use async_trait::async_trait;
use holocron_domain::{
    password::PasswordHash,
    user::{Email, NewUser, User, UserId},
};
use sqlx::AnyPool;

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// すべてのユーザーを ID 順で取得する
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索する
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーを挿入し、採番済みのエンティティを返す
    ///
    /// `is_active` は常に `true` で作成される。
    async fn insert(&self, user: &NewUser) -> Result<User, InfraError>;
}

/// SQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    pool: AnyPool,
}

impl SqlUserRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, password, \
     CASE WHEN is_active THEN CAST(1 AS BIGINT) ELSE CAST(0 AS BIGINT) END AS is_active";

#[derive(sqlx::FromRow)]
struct UserRow {
    id:        i64,
    email:     String,
    password:  String,
    is_active: i64,
}

impl TryFrom<UserRow> for User {
    type Error = InfraError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::from_db(
            UserId::from_i64(row.id),
            Email::new(row.email)?,
            PasswordHash::new(row.password),
            row.is_active != 0,
        ))
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let rows: Vec<UserRow> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, user: &NewUser) -> Result<User, InfraError> {
        let sql = format!(
            "INSERT INTO users (email, password, is_active) VALUES ($1, $2, TRUE) \
             RETURNING {USER_COLUMNS}"
        );
        let row: UserRow = sqlx::query_as(&sql)
            .bind(user.email.as_str())
            .bind(user.password.as_str())
            .fetch_one(&self.pool)
            .await?;

        User::try_from(row)
    }
}
