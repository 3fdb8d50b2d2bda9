//! # お気に入りハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /favorite/planet` - 惑星をお気に入りに追加（`user_id`, `planet_id` はボディ）
//! - `POST /favorite/planet/{id}` - 惑星をお気に入りに追加（`user_id` はボディ）
//! - `POST /favorite/people` - 人物をお気に入りに追加（`user_id`, `people_id` はボディ）
//! - `POST /favorite/people/{id}` - 人物をお気に入りに追加（`user_id` はボディ）
//! - `DELETE /favorite/planet/{id}` - 惑星のお気に入りを削除（`user_id` はボディ）
//! - `DELETE /{user_id}/favorite/planet/{id}` - 惑星のお気に入りを削除
//! - `DELETE /favorite/people/{id}` - 人物のお気に入りを削除（`user_id` はボディ）
//! - `DELETE /{user_id}/favorite/people/{id}` - 人物のお気に入りを削除
//! - `GET /favorites/{user_id}`, `GET /{user_id}/favorites` - ユーザーのお気に入り一覧
//!
//! パスとボディの両方に参照先 ID がある場合はパスの値を使う。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use holocron_domain::{
   favorite::{Favorite, FavoriteTarget, NewFavorite},
   person::PersonId,
   planet::PlanetId,
   user::UserId,
};
use holocron_shared::MessageResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::{CoreError, json_body},
   usecase::{
      FavoriteUseCaseImpl,
      favorite::{FAVORITE_DELETED, TargetMessages},
   },
};

/// お気に入り API の共有状態
pub struct FavoriteState {
   pub usecase: FavoriteUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// お気に入り DTO
///
/// 参照していない側の ID は `null` になる。
#[derive(Debug, Serialize)]
pub struct FavoriteDto {
   pub id:        i64,
   pub user_id:   i64,
   pub people_id: Option<i64>,
   pub planet_id: Option<i64>,
}

impl From<Favorite> for FavoriteDto {
   fn from(favorite: Favorite) -> Self {
      let target = favorite.target();
      Self {
         id:        favorite.id().as_i64(),
         user_id:   favorite.user_id().as_i64(),
         people_id: target.person_id().map(|id| id.as_i64()),
         planet_id: target.planet_id().map(|id| id.as_i64()),
      }
   }
}

/// 惑星のお気に入り追加リクエスト（ボディ形式）
#[derive(Debug, Default, Deserialize)]
pub struct FavoritePlanetRequest {
   pub user_id:   Option<i64>,
   pub planet_id: Option<i64>,
}

/// 人物のお気に入り追加リクエスト（ボディ形式）
#[derive(Debug, Default, Deserialize)]
pub struct FavoritePeopleRequest {
   pub user_id:   Option<i64>,
   pub people_id: Option<i64>,
}

/// 参照先をパスで受け取る操作のリクエスト
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteOwnerRequest {
   pub user_id: Option<i64>,
}

// --- ハンドラ ---

/// POST /favorite/planet
pub async fn add_favorite_planet(
   State(state): State<Arc<FavoriteState>>,
   payload: Result<Json<FavoritePlanetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;
   let planet_id = require_id(req.planet_id, "planet_id")?;

   add(&state, user_id, FavoriteTarget::Planet(PlanetId::from_i64(planet_id))).await
}

/// POST /favorite/planet/{id}
pub async fn add_favorite_planet_by_path(
   State(state): State<Arc<FavoriteState>>,
   Path(planet_id): Path<i64>,
   payload: Result<Json<FavoriteOwnerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;

   add(&state, user_id, FavoriteTarget::Planet(PlanetId::from_i64(planet_id))).await
}

/// POST /favorite/people
pub async fn add_favorite_person(
   State(state): State<Arc<FavoriteState>>,
   payload: Result<Json<FavoritePeopleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;
   let people_id = require_id(req.people_id, "people_id")?;

   add(&state, user_id, FavoriteTarget::Person(PersonId::from_i64(people_id))).await
}

/// POST /favorite/people/{id}
pub async fn add_favorite_person_by_path(
   State(state): State<Arc<FavoriteState>>,
   Path(people_id): Path<i64>,
   payload: Result<Json<FavoriteOwnerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;

   add(&state, user_id, FavoriteTarget::Person(PersonId::from_i64(people_id))).await
}

/// DELETE /favorite/planet/{id}
pub async fn remove_favorite_planet(
   State(state): State<Arc<FavoriteState>>,
   Path(planet_id): Path<i64>,
   payload: Result<Json<FavoriteOwnerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;

   remove(&state, user_id, FavoriteTarget::Planet(PlanetId::from_i64(planet_id))).await
}

/// DELETE /{user_id}/favorite/planet/{id}
pub async fn remove_user_favorite_planet(
   State(state): State<Arc<FavoriteState>>,
   Path((user_id, planet_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, CoreError> {
   remove(&state, user_id, FavoriteTarget::Planet(PlanetId::from_i64(planet_id))).await
}

/// DELETE /favorite/people/{id}
pub async fn remove_favorite_person(
   State(state): State<Arc<FavoriteState>>,
   Path(people_id): Path<i64>,
   payload: Result<Json<FavoriteOwnerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;
   let user_id = require_id(req.user_id, "user_id")?;

   remove(&state, user_id, FavoriteTarget::Person(PersonId::from_i64(people_id))).await
}

/// DELETE /{user_id}/favorite/people/{id}
pub async fn remove_user_favorite_person(
   State(state): State<Arc<FavoriteState>>,
   Path((user_id, people_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, CoreError> {
   remove(&state, user_id, FavoriteTarget::Person(PersonId::from_i64(people_id))).await
}

/// GET /favorites/{user_id}, GET /{user_id}/favorites
pub async fn list_favorites(
   State(state): State<Arc<FavoriteState>>,
   Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let favorites = state
      .usecase
      .list_favorites(UserId::from_i64(user_id))
      .await?;

   let response: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();
   Ok(Json(response))
}

// --- 共通処理 ---

/// ボディの必須 ID フィールドを取り出す
fn require_id(value: Option<i64>, field: &str) -> Result<i64, CoreError> {
   value.ok_or_else(|| CoreError::BadRequest(format!("{field} es un campo requerido")))
}

async fn add(
   state: &FavoriteState,
   user_id: i64,
   target: FavoriteTarget,
) -> Result<Json<MessageResponse>, CoreError> {
   state
      .usecase
      .add_favorite(NewFavorite {
         user_id: UserId::from_i64(user_id),
         target,
      })
      .await?;

   Ok(Json(MessageResponse::new(TargetMessages::of(target).added)))
}

async fn remove(
   state: &FavoriteState,
   user_id: i64,
   target: FavoriteTarget,
) -> Result<Json<MessageResponse>, CoreError> {
   state
      .usecase
      .remove_favorite(UserId::from_i64(user_id), target)
      .await?;

   Ok(Json(MessageResponse::new(FAVORITE_DELETED)))
}
