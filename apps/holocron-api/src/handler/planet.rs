//! # 惑星ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /planets` - 惑星一覧（ID 順）
//! - `GET /planets/{id}` - 惑星詳細
//! - `POST /planets` - 惑星作成
//! - `PUT /planets/{id}` - 惑星更新
//! - `DELETE /planets/{id}` - 惑星削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use holocron_domain::planet::{Planet, PlanetId};
use holocron_infra::repository::PlanetRepository;
use holocron_shared::SuccessResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::{CoreError, json_body},
   usecase::{
      PlanetUseCaseImpl,
      planet::{PLANET_DELETED, PLANET_NOT_FOUND, UpdatePlanetInput},
   },
};

/// 惑星 API の共有状態
pub struct PlanetState {
   pub planet_repository: Arc<dyn PlanetRepository>,
   pub usecase:           PlanetUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 惑星 DTO
#[derive(Debug, Serialize)]
pub struct PlanetDto {
   pub id:   i64,
   pub name: String,
}

impl From<Planet> for PlanetDto {
   fn from(planet: Planet) -> Self {
      Self {
         id:   planet.id().as_i64(),
         name: planet.name().as_str().to_string(),
      }
   }
}

/// 惑星作成リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlanetRequest {
   pub name: Option<String>,
}

/// 惑星更新リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlanetRequest {
   pub name: Option<String>,
}

// --- ハンドラ ---

/// GET /planets
pub async fn list_planets(
   State(state): State<Arc<PlanetState>>,
) -> Result<impl IntoResponse, CoreError> {
   let planets = state.planet_repository.find_all().await?;

   let response: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();
   Ok(Json(response))
}

/// GET /planets/{id}
pub async fn get_planet(
   State(state): State<Arc<PlanetState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let planet = state
      .planet_repository
      .find_by_id(PlanetId::from_i64(id))
      .await?
      .ok_or_else(|| CoreError::message_not_found(PLANET_NOT_FOUND))?;

   Ok(Json(PlanetDto::from(planet)))
}

/// POST /planets
pub async fn create_planet(
   State(state): State<Arc<PlanetState>>,
   payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;

   let planet = state.usecase.create_planet(req.name).await?;

   Ok(Json(PlanetDto::from(planet)))
}

/// PUT /planets/{id}
pub async fn update_planet(
   State(state): State<Arc<PlanetState>>,
   Path(id): Path<i64>,
   payload: Result<Json<UpdatePlanetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;

   let planet = state
      .usecase
      .update_planet(UpdatePlanetInput {
         id:   PlanetId::from_i64(id),
         name: req.name,
      })
      .await?;

   Ok(Json(PlanetDto::from(planet)))
}

/// DELETE /planets/{id}
pub async fn delete_planet(
   State(state): State<Arc<PlanetState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   state.usecase.delete_planet(PlanetId::from_i64(id)).await?;

   Ok(Json(SuccessResponse::new(PLANET_DELETED)))
}
