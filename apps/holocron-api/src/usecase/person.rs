//! 人物管理ユースケース

use std::sync::Arc;

use holocron_domain::person::{NewPerson, Person, PersonId, PersonName};
use holocron_infra::repository::PersonRepository;

use super::{REQUIRED_FIELDS, parse_required};
use crate::error::CoreError;

pub(crate) const PERSON_NOT_FOUND: &str = "Persona no encontrada";
pub(crate) const PERSON_DELETED: &str = "Persona eliminado con éxito";

/// 人物更新の入力
pub struct UpdatePersonInput {
    pub id:   PersonId,
    /// 指定された場合のみ上書きする
    pub name: Option<String>,
}

/// 人物管理ユースケース
pub struct PersonUseCaseImpl {
    person_repository: Arc<dyn PersonRepository>,
}

impl PersonUseCaseImpl {
    pub fn new(person_repository: Arc<dyn PersonRepository>) -> Self {
        Self { person_repository }
    }

    /// 人物を作成する
    pub async fn create_person(&self, name: Option<String>) -> Result<Person, CoreError> {
        let name = parse_required(name, REQUIRED_FIELDS, PersonName::new)?;

        let person = self.person_repository.insert(&NewPerson { name }).await?;

        tracing::info!(person_id = %person.id(), "人物を作成しました");
        Ok(person)
    }

    /// 人物を更新する
    ///
    /// 名前が指定されていなければ変更せずに現在の値を返す。
    pub async fn update_person(&self, input: UpdatePersonInput) -> Result<Person, CoreError> {
        let person = self.find_existing(input.id).await?;

        let person = match input.name {
            Some(name) => {
                person.with_name(parse_required(Some(name), REQUIRED_FIELDS, PersonName::new)?)
            }
            None => person,
        };

        self.person_repository.update(&person).await?;

        Ok(person)
    }

    /// 人物を削除する
    ///
    /// 参照しているお気に入りはストアの外部キー制約で一緒に削除される。
    pub async fn delete_person(&self, id: PersonId) -> Result<(), CoreError> {
        self.find_existing(id).await?;

        self.person_repository.delete(id).await?;

        tracing::info!(person_id = %id, "人物を削除しました");
        Ok(())
    }

    async fn find_existing(&self, id: PersonId) -> Result<Person, CoreError> {
        self.person_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(PERSON_NOT_FOUND.to_string()))
    }
}
