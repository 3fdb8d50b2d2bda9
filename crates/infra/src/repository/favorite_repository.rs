//! # FavoriteRepository
//!
//! お気に入り（favorites テーブル）の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **参照先の表現**: DB 上は `people_id` / `planet_id` の nullable カラム 2 つで保持し、
//!   読み出し時に [`FavoriteTarget`] へ変換する
//! - **重複**: 同じ (user, target) の組は複数行存在しうる。
//!   [`find_by_user_and_target`](FavoriteRepository::find_by_user_and_target) は
//!   最も小さい ID の行を返す

use async_trait::async_trait;
use holocron_domain::{
    favorite::{Favorite, FavoriteId, FavoriteTarget, NewFavorite},
    user::UserId,
};
use sqlx::AnyPool;

use crate::error::InfraError;

/// お気に入りリポジトリトレイト
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// ユーザーのお気に入りを ID 順で取得する
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, InfraError>;

    /// ユーザーと参照先の組に一致するお気に入りを 1 件取得する
    ///
    /// 複数一致する場合は ID が最小のものを返す。
    async fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, InfraError>;

    /// お気に入りを挿入し、採番済みのエンティティを返す
    async fn insert(&self, favorite: &NewFavorite) -> Result<Favorite, InfraError>;

    /// お気に入りを削除する
    async fn delete(&self, id: FavoriteId) -> Result<(), InfraError>;
}

/// SQL 実装の FavoriteRepository
#[derive(Debug, Clone)]
pub struct SqlFavoriteRepository {
    pool: AnyPool,
}

impl SqlFavoriteRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteRow {
    id:        i64,
    user_id:   i64,
    people_id: Option<i64>,
    planet_id: Option<i64>,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = InfraError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(Favorite::from_db(
            FavoriteId::from_i64(row.id),
            UserId::from_i64(row.user_id),
            FavoriteTarget::from_columns(row.people_id, row.planet_id)?,
        ))
    }
}

#[async_trait]
impl FavoriteRepository for SqlFavoriteRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, InfraError> {
        let rows: Vec<FavoriteRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, people_id, planet_id
            FROM favorites
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Favorite::try_from).collect()
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(%user_id, target = target.kind())
    )]
    async fn find_by_user_and_target(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<Option<Favorite>, InfraError> {
        let (column, target_id) = match target {
            FavoriteTarget::Person(id) => ("people_id", id.as_i64()),
            FavoriteTarget::Planet(id) => ("planet_id", id.as_i64()),
        };
        let sql = format!(
            "SELECT id, user_id, people_id, planet_id FROM favorites \
             WHERE user_id = $1 AND {column} = $2 ORDER BY id LIMIT 1"
        );

        let row: Option<FavoriteRow> = sqlx::query_as(&sql)
            .bind(user_id.as_i64())
            .bind(target_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Favorite::try_from).transpose()
    }

    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(user_id = %favorite.user_id, target = favorite.target.kind())
    )]
    async fn insert(&self, favorite: &NewFavorite) -> Result<Favorite, InfraError> {
        let row: FavoriteRow = sqlx::query_as(
            r#"
            INSERT INTO favorites (user_id, people_id, planet_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, people_id, planet_id
            "#,
        )
        .bind(favorite.user_id.as_i64())
        .bind(favorite.target.person_id().map(|id| id.as_i64()))
        .bind(favorite.target.planet_id().map(|id| id.as_i64()))
        .fetch_one(&self.pool)
        .await?;

        Favorite::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: FavoriteId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
