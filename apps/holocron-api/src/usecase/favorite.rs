//! お気に入り管理ユースケース
//!
//! お気に入りの追加・削除・一覧取得と、その前提となる参照整合性チェックを行う。
//!
//! - 追加: ユーザーと参照先の両方が存在する場合のみ挿入する
//! - 削除: (ユーザー, 参照先) の完全一致で検索し、重複がある場合は ID 最小の 1 件を削除する
//! - 一覧: ユーザーが存在する場合のみ、そのユーザーのお気に入りを ID 順で返す

use std::sync::Arc;

use holocron_domain::{
    favorite::{Favorite, FavoriteTarget, NewFavorite},
    user::UserId,
};
use holocron_infra::repository::{
    FavoriteRepository,
    PersonRepository,
    PlanetRepository,
    UserRepository,
};

use super::user::USER_NOT_FOUND;
use crate::error::CoreError;

pub(crate) const FAVORITE_NOT_FOUND: &str = "Favorito no encontrado";
pub(crate) const FAVORITE_DELETED: &str = "Favorito eliminado correctamente";

/// 参照先の種別ごとのクライアント向け文言
pub(crate) struct TargetMessages {
    /// ユーザーまたは参照先が存在しない
    pub not_found: &'static str,
    /// 追加成功
    pub added:     &'static str,
}

impl TargetMessages {
    pub(crate) fn of(target: FavoriteTarget) -> Self {
        match target {
            FavoriteTarget::Person(_) => Self {
                not_found: "Usuario o persona no encontrado",
                added:     "Persona agregada a favoritos correctamente",
            },
            FavoriteTarget::Planet(_) => Self {
                not_found: "Usuario o planeta no encontrado",
                added:     "Planeta agregado a favoritos correctamente",
            },
        }
    }
}

/// お気に入り管理ユースケース
pub struct FavoriteUseCaseImpl {
    favorite_repository: Arc<dyn FavoriteRepository>,
    user_repository:     Arc<dyn UserRepository>,
    person_repository:   Arc<dyn PersonRepository>,
    planet_repository:   Arc<dyn PlanetRepository>,
}

impl FavoriteUseCaseImpl {
    pub fn new(
        favorite_repository: Arc<dyn FavoriteRepository>,
        user_repository: Arc<dyn UserRepository>,
        person_repository: Arc<dyn PersonRepository>,
        planet_repository: Arc<dyn PlanetRepository>,
    ) -> Self {
        Self {
            favorite_repository,
            user_repository,
            person_repository,
            planet_repository,
        }
    }

    /// お気に入りを追加する
    ///
    /// 同じ組み合わせがすでに登録されていても追加する。
    pub async fn add_favorite(&self, favorite: NewFavorite) -> Result<Favorite, CoreError> {
        let user_exists = self.user_exists(favorite.user_id).await?;
        let target_exists = self.target_exists(favorite.target).await?;

        if !user_exists || !target_exists {
            return Err(CoreError::NotFound(
                TargetMessages::of(favorite.target).not_found.to_string(),
            ));
        }

        let created = self.favorite_repository.insert(&favorite).await?;

        tracing::info!(
            favorite_id = %created.id(),
            user_id = %created.user_id(),
            target = created.target().kind(),
            "お気に入りを追加しました"
        );
        Ok(created)
    }

    /// お気に入りを削除する
    pub async fn remove_favorite(
        &self,
        user_id: UserId,
        target: FavoriteTarget,
    ) -> Result<(), CoreError> {
        let favorite = self
            .favorite_repository
            .find_by_user_and_target(user_id, target)
            .await?
            .ok_or_else(|| CoreError::NotFound(FAVORITE_NOT_FOUND.to_string()))?;

        self.favorite_repository.delete(favorite.id()).await?;

        tracing::info!(favorite_id = %favorite.id(), %user_id, "お気に入りを削除しました");
        Ok(())
    }

    /// ユーザーのお気に入り一覧を取得する
    pub async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Favorite>, CoreError> {
        if !self.user_exists(user_id).await? {
            return Err(CoreError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(self.favorite_repository.find_by_user(user_id).await?)
    }

    async fn user_exists(&self, user_id: UserId) -> Result<bool, CoreError> {
        Ok(self.user_repository.find_by_id(user_id).await?.is_some())
    }

    async fn target_exists(&self, target: FavoriteTarget) -> Result<bool, CoreError> {
        let exists = match target {
            FavoriteTarget::Person(id) => self.person_repository.find_by_id(id).await?.is_some(),
            FavoriteTarget::Planet(id) => self.planet_repository.find_by_id(id).await?.is_some(),
        };
        Ok(exists)
    }
}
