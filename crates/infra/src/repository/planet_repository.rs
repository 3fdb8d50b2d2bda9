//! # PlanetRepository
//!
//! 惑星（planets テーブル）の永続化を担当するリポジトリ。

use async_trait::async_trait;
use holocron_domain::planet::{NewPlanet, Planet, PlanetId, PlanetName};
use sqlx::AnyPool;

use crate::error::InfraError;

/// 惑星リポジトリトレイト
#[async_trait]
pub trait PlanetRepository: Send + Sync {
    /// すべての惑星を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Planet>, InfraError>;

    /// ID で惑星を検索する
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError>;

    /// 惑星を挿入し、採番済みのエンティティを返す
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError>;

    /// 惑星の名前を更新する
    async fn update(&self, planet: &Planet) -> Result<(), InfraError>;

    /// 惑星を削除する
    async fn delete(&self, id: PlanetId) -> Result<(), InfraError>;
}

/// SQL 実装の PlanetRepository
#[derive(Debug, Clone)]
pub struct SqlPlanetRepository {
    pool: AnyPool,
}

impl SqlPlanetRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PlanetRow {
    id:   i64,
    name: String,
}

impl TryFrom<PlanetRow> for Planet {
    type Error = InfraError;

    fn try_from(row: PlanetRow) -> Result<Self, Self::Error> {
        Ok(Planet::from_db(
            PlanetId::from_i64(row.id),
            PlanetName::new(row.name)?,
        ))
    }
}

#[async_trait]
impl PlanetRepository for SqlPlanetRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Planet>, InfraError> {
        let rows: Vec<PlanetRow> = sqlx::query_as("SELECT id, name FROM planets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Planet::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError> {
        let row: Option<PlanetRow> = sqlx::query_as("SELECT id, name FROM planets WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Planet::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError> {
        let row: PlanetRow =
            sqlx::query_as("INSERT INTO planets (name) VALUES ($1) RETURNING id, name")
                .bind(planet.name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Planet::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %planet.id()))]
    async fn update(&self, planet: &Planet) -> Result<(), InfraError> {
        sqlx::query("UPDATE planets SET name = $1 WHERE id = $2")
            .bind(planet.name().as_str())
            .bind(planet.id().as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: PlanetId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
