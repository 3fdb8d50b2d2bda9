//! # ユーザーハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /users` - ユーザー一覧（ID 順）
//! - `GET /users/{id}` - ユーザー詳細
//! - `POST /users` - ユーザー作成
//!
//! ユーザーの `password` フィールドには保存済みの Argon2id ハッシュを返す。
//! 平文パスワードはどのレスポンスにも含まれない。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use holocron_domain::user::{User, UserId};
use holocron_infra::repository::UserRepository;
use serde::{Deserialize, Serialize};

use crate::{
   error::{CoreError, json_body},
   usecase::{
      UserUseCaseImpl,
      user::{CreateUserInput, USER_CREATED, USER_NOT_FOUND},
   },
};

/// ユーザー API の共有状態
pub struct UserState {
   pub user_repository: Arc<dyn UserRepository>,
   pub usecase:         UserUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー DTO
#[derive(Debug, Serialize)]
pub struct UserDto {
   pub id:        i64,
   pub email:     String,
   pub password:  String,
   pub is_active: bool,
}

impl From<User> for UserDto {
   fn from(user: User) -> Self {
      Self {
         id:        user.id().as_i64(),
         email:     user.email().as_str().to_string(),
         password:  user.password_hash().as_str().to_string(),
         is_active: user.is_active(),
      }
   }
}

/// ユーザー作成リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
   pub email:    Option<String>,
   pub password: Option<String>,
}

/// ユーザー作成レスポンス
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
   pub message: String,
   pub user_id: i64,
}

// --- ハンドラ ---

/// GET /users
pub async fn list_users(
   State(state): State<Arc<UserState>>,
) -> Result<impl IntoResponse, CoreError> {
   let users = state.user_repository.find_all().await?;

   let response: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
   Ok(Json(response))
}

/// GET /users/{id}
pub async fn get_user(
   State(state): State<Arc<UserState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let user = state
      .user_repository
      .find_by_id(UserId::from_i64(id))
      .await?
      .ok_or_else(|| CoreError::NotFound(USER_NOT_FOUND.to_string()))?;

   Ok(Json(UserDto::from(user)))
}

/// POST /users
///
/// 成功時は 201 Created。
pub async fn create_user(
   State(state): State<Arc<UserState>>,
   payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;

   let user = state
      .usecase
      .create_user(CreateUserInput {
         email:    req.email,
         password: req.password,
      })
      .await?;

   let response = CreateUserResponse {
      message: USER_CREATED.to_string(),
      user_id: user.id().as_i64(),
   };
   Ok((StatusCode::CREATED, Json(response)))
}
