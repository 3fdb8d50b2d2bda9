//! 惑星管理ユースケース

use std::sync::Arc;

use holocron_domain::planet::{NewPlanet, Planet, PlanetId, PlanetName};
use holocron_infra::repository::PlanetRepository;

use super::{REQUIRED_FIELDS, parse_required};
use crate::error::CoreError;

pub(crate) const PLANET_NOT_FOUND: &str = "Planeta no encontrado";
pub(crate) const PLANET_DELETED: &str = "Planeta eliminado con éxito";

/// 惑星更新の入力
pub struct UpdatePlanetInput {
    pub id:   PlanetId,
    /// 指定された場合のみ上書きする
    pub name: Option<String>,
}

/// 惑星管理ユースケース
pub struct PlanetUseCaseImpl {
    planet_repository: Arc<dyn PlanetRepository>,
}

impl PlanetUseCaseImpl {
    pub fn new(planet_repository: Arc<dyn PlanetRepository>) -> Self {
        Self { planet_repository }
    }

    /// 惑星を作成する
    pub async fn create_planet(&self, name: Option<String>) -> Result<Planet, CoreError> {
        let name = parse_required(name, REQUIRED_FIELDS, PlanetName::new)?;

        let planet = self.planet_repository.insert(&NewPlanet { name }).await?;

        tracing::info!(planet_id = %planet.id(), "惑星を作成しました");
        Ok(planet)
    }

    /// 惑星を更新する
    ///
    /// 名前が指定されていなければ変更せずに現在の値を返す。
    pub async fn update_planet(&self, input: UpdatePlanetInput) -> Result<Planet, CoreError> {
        let planet = self.find_existing(input.id).await?;

        let planet = match input.name {
            Some(name) => {
                planet.with_name(parse_required(Some(name), REQUIRED_FIELDS, PlanetName::new)?)
            }
            None => planet,
        };

        self.planet_repository.update(&planet).await?;

        Ok(planet)
    }

    /// 惑星を削除する
    ///
    /// 参照しているお気に入りはストアの外部キー制約で一緒に削除される。
    pub async fn delete_planet(&self, id: PlanetId) -> Result<(), CoreError> {
        self.find_existing(id).await?;

        self.planet_repository.delete(id).await?;

        tracing::info!(planet_id = %id, "惑星を削除しました");
        Ok(())
    }

    async fn find_existing(&self, id: PlanetId) -> Result<Planet, CoreError> {
        self.planet_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(PLANET_NOT_FOUND.to_string()))
    }
}
