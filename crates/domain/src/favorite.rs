//! # お気に入り
//!
//! ユーザーと人物、またはユーザーと惑星を結ぶ関連エンティティ。
//!
//! ## 設計方針
//!
//! - **参照先は必ず 1 つ**: 「人物 XOR 惑星」を [`FavoriteTarget`] のバリアントで表現し、
//!   両方・どちらも未設定という状態を型レベルで排除する
//! - **永続化形式との変換**: DB 上は `people_id` / `planet_id` の 2 カラムで保持するため、
//!   [`FavoriteTarget::from_columns`] / [`FavoriteTarget::person_id`] /
//!   [`FavoriteTarget::planet_id`] で相互変換する
//! - **重複許容**: 同じ (user, target) の組を複数登録できる

use strum::IntoStaticStr;

use crate::{DomainError, person::PersonId, planet::PlanetId, user::UserId};

define_serial_id! {
    /// お気に入り ID
    pub struct FavoriteId;
}

/// お気に入りの参照先
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum FavoriteTarget {
    /// 人物
    Person(PersonId),
    /// 惑星
    Planet(PlanetId),
}

impl FavoriteTarget {
    /// DB の 2 カラムから参照先を復元する
    ///
    /// ちょうど一方だけが設定されている場合のみ成功する。
    pub fn from_columns(
        people_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        match (people_id, planet_id) {
            (Some(id), None) => Ok(Self::Person(PersonId::from_i64(id))),
            (None, Some(id)) => Ok(Self::Planet(PlanetId::from_i64(id))),
            (people_id, planet_id) => Err(DomainError::Inconsistent(format!(
                "お気に入りの参照先は人物か惑星のどちらか一方でなければならない \
                 (people_id={people_id:?}, planet_id={planet_id:?})"
            ))),
        }
    }

    /// 人物を参照している場合、その ID を返す
    pub fn person_id(&self) -> Option<PersonId> {
        match self {
            Self::Person(id) => Some(*id),
            Self::Planet(_) => None,
        }
    }

    /// 惑星を参照している場合、その ID を返す
    pub fn planet_id(&self) -> Option<PlanetId> {
        match self {
            Self::Planet(id) => Some(*id),
            Self::Person(_) => None,
        }
    }

    /// ログ出力用の種別名（`"person"` / `"planet"`）
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

/// お気に入りエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    id:      FavoriteId,
    user_id: UserId,
    target:  FavoriteTarget,
}

/// 新規お気に入り（ID 採番前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub target:  FavoriteTarget,
}

impl Favorite {
    /// 既存データから復元する
    pub fn from_db(id: FavoriteId, user_id: UserId, target: FavoriteTarget) -> Self {
        Self {
            id,
            user_id,
            target,
        }
    }

    pub fn id(&self) -> FavoriteId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn target(&self) -> FavoriteTarget {
        self.target
    }
}
