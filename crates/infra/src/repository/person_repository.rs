//! # PersonRepository
//!
//! 人物（people テーブル）の永続化を担当するリポジトリ。

use async_trait::async_trait;
use holocron_domain::person::{NewPerson, Person, PersonId, PersonName};
use sqlx::AnyPool;

use crate::error::InfraError;

/// 人物リポジトリトレイト
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// すべての人物を ID 順で取得する
    async fn find_all(&self) -> Result<Vec<Person>, InfraError>;

    /// ID で人物を検索する
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, InfraError>;

    /// 人物を挿入し、採番済みのエンティティを返す
    async fn insert(&self, person: &NewPerson) -> Result<Person, InfraError>;

    /// 人物の名前を更新する
    async fn update(&self, person: &Person) -> Result<(), InfraError>;

    /// 人物を削除する
    async fn delete(&self, id: PersonId) -> Result<(), InfraError>;
}

/// SQL 実装の PersonRepository
#[derive(Debug, Clone)]
pub struct SqlPersonRepository {
    pool: AnyPool,
}

impl SqlPersonRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PersonRow {
    id:   i64,
    name: String,
}

impl TryFrom<PersonRow> for Person {
    type Error = InfraError;

    fn try_from(row: PersonRow) -> Result<Self, Self::Error> {
        Ok(Person::from_db(
            PersonId::from_i64(row.id),
            PersonName::new(row.name)?,
        ))
    }
}

#[async_trait]
impl PersonRepository for SqlPersonRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Person>, InfraError> {
        let rows: Vec<PersonRow> = sqlx::query_as("SELECT id, name FROM people ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Person::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, InfraError> {
        let row: Option<PersonRow> = sqlx::query_as("SELECT id, name FROM people WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Person::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, person: &NewPerson) -> Result<Person, InfraError> {
        let row: PersonRow =
            sqlx::query_as("INSERT INTO people (name) VALUES ($1) RETURNING id, name")
                .bind(person.name.as_str())
                .fetch_one(&self.pool)
                .await?;

        Person::try_from(row)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %person.id()))]
    async fn update(&self, person: &Person) -> Result<(), InfraError> {
        sqlx::query("UPDATE people SET name = $1 WHERE id = $2")
            .bind(person.name().as_str())
            .bind(person.id().as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: PersonId) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
