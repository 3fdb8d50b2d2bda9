//! # 人物ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /people` - 人物一覧（ID 順）
//! - `GET /people/{id}` - 人物詳細
//! - `POST /people` - 人物作成
//! - `PUT /people/{id}` - 人物更新
//! - `DELETE /people/{id}` - 人物削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use holocron_domain::person::{Person, PersonId};
use holocron_infra::repository::PersonRepository;
use holocron_shared::SuccessResponse;
use serde::{Deserialize, Serialize};

use crate::{
   error::{CoreError, json_body},
   usecase::{
      PersonUseCaseImpl,
      person::{PERSON_DELETED, PERSON_NOT_FOUND, UpdatePersonInput},
   },
};

/// 人物 API の共有状態
pub struct PersonState {
   pub person_repository: Arc<dyn PersonRepository>,
   pub usecase:           PersonUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 人物 DTO
#[derive(Debug, Serialize)]
pub struct PersonDto {
   pub id:   i64,
   pub name: String,
}

impl From<Person> for PersonDto {
   fn from(person: Person) -> Self {
      Self {
         id:   person.id().as_i64(),
         name: person.name().as_str().to_string(),
      }
   }
}

/// 人物作成リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct CreatePersonRequest {
   pub name: Option<String>,
}

/// 人物更新リクエスト
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePersonRequest {
   pub name: Option<String>,
}

// --- ハンドラ ---

/// GET /people
pub async fn list_people(
   State(state): State<Arc<PersonState>>,
) -> Result<impl IntoResponse, CoreError> {
   let people = state.person_repository.find_all().await?;

   let response: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();
   Ok(Json(response))
}

/// GET /people/{id}
pub async fn get_person(
   State(state): State<Arc<PersonState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   let person = state
      .person_repository
      .find_by_id(PersonId::from_i64(id))
      .await?
      .ok_or_else(|| CoreError::message_not_found(PERSON_NOT_FOUND))?;

   Ok(Json(PersonDto::from(person)))
}

/// POST /people
pub async fn create_person(
   State(state): State<Arc<PersonState>>,
   payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;

   let person = state.usecase.create_person(req.name).await?;

   Ok(Json(PersonDto::from(person)))
}

/// PUT /people/{id}
pub async fn update_person(
   State(state): State<Arc<PersonState>>,
   Path(id): Path<i64>,
   payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
   let req = json_body(payload)?;

   let person = state
      .usecase
      .update_person(UpdatePersonInput {
         id:   PersonId::from_i64(id),
         name: req.name,
      })
      .await?;

   Ok(Json(PersonDto::from(person)))
}

/// DELETE /people/{id}
pub async fn delete_person(
   State(state): State<Arc<PersonState>>,
   Path(id): Path<i64>,
) -> Result<impl IntoResponse, CoreError> {
   state.usecase.delete_person(PersonId::from_i64(id)).await?;

   Ok(Json(SuccessResponse::new(PERSON_DELETED)))
}

#[cfg(test)]
mod tests {
   use std::sync::Arc;

   use async_trait::async_trait;
   use holocron_domain::person::{NewPerson, Person, PersonId};
   use holocron_infra::{InfraError, repository::PersonRepository};
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use crate::test_utils::{TestApp, send};

   /// すべての操作がデータベースエラーになるリポジトリ
   struct UnavailablePersonRepository;

   #[async_trait]
   impl PersonRepository for UnavailablePersonRepository {
      async fn find_all(&self) -> Result<Vec<Person>, InfraError> {
         Err(sqlx::Error::PoolTimedOut.into())
      }

      async fn find_by_id(&self, _id: PersonId) -> Result<Option<Person>, InfraError> {
         Err(sqlx::Error::PoolTimedOut.into())
      }

      async fn insert(&self, _person: &NewPerson) -> Result<Person, InfraError> {
         Err(sqlx::Error::PoolTimedOut.into())
      }

      async fn update(&self, _person: &Person) -> Result<(), InfraError> {
         Err(sqlx::Error::PoolTimedOut.into())
      }

      async fn delete(&self, _id: PersonId) -> Result<(), InfraError> {
         Err(sqlx::Error::PoolTimedOut.into())
      }
   }

   #[tokio::test]
   async fn test_一覧はid順で返す() {
      // Given
      let app = TestApp::new().await;
      app.people.add_person("Luke Skywalker");
      app.people.add_person("Leia Organa");

      // When
      let (status, body) = app.get("/people").await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(
         body,
         json!([
            { "id": 1, "name": "Luke Skywalker" },
            { "id": 2, "name": "Leia Organa" }
         ])
      );
   }

   #[tokio::test]
   async fn test_空の一覧は空配列() {
      let app = TestApp::new().await;

      let (status, body) = app.get("/people").await;

      assert_eq!(status, 200);
      assert_eq!(body, json!([]));
   }

   #[tokio::test]
   async fn test_作成した名前は空白も含めて取得時にそのまま返る() {
      // Given
      let app = TestApp::new().await;

      // When
      let (created_status, created) = app
         .request("POST", "/people", Some(json!({ "name": " Luke " })))
         .await;
      let (status, body) = app.get("/people/1").await;

      // Then
      assert_eq!(created_status, 200);
      assert_eq!(created, json!({ "id": 1, "name": " Luke " }));
      assert_eq!(status, 200);
      assert_eq!(body, json!({ "id": 1, "name": " Luke " }));
   }

   #[tokio::test]
   async fn test_長い名前でも作成できる() {
      let app = TestApp::new().await;
      let long = "x".repeat(300);

      let (status, body) = app
         .request("POST", "/people", Some(json!({ "name": long })))
         .await;

      assert_eq!(status, 200);
      assert_eq!(body["name"], json!(long));
   }

   #[tokio::test]
   async fn test_存在しないidの取得はmessageキーで404() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app.get("/people/42").await;

      // Then
      assert_eq!(status, 404);
      assert_eq!(body, json!({ "message": "Persona no encontrada" }));
   }

   #[tokio::test]
   async fn test_作成は200で採番済みの人物を返す() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app
         .request("POST", "/people", Some(json!({ "name": "Obi-Wan Kenobi" })))
         .await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(body, json!({ "id": 1, "name": "Obi-Wan Kenobi" }));
      assert_eq!(app.people.len(), 1);
   }

   #[tokio::test]
   async fn test_名前のない作成は400() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app.request("POST", "/people", Some(json!({}))).await;

      // Then
      assert_eq!(status, 400);
      assert_eq!(body, json!({ "error": "Todos los campos son requeridos" }));
      assert!(app.people.is_empty());
   }

   #[tokio::test]
   async fn test_ボディなしの作成も必須項目エラー() {
      let app = TestApp::new().await;

      let (status, body) = app.request("POST", "/people", None).await;

      assert_eq!(status, 400);
      assert_eq!(body, json!({ "error": "Todos los campos son requeridos" }));
   }

   #[tokio::test]
   async fn test_壊れたjsonは400() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app.request_raw("POST", "/people", "{\"name\":").await;

      // Then
      assert_eq!(status, 400);
      assert!(body["error"].is_string());
   }

   #[tokio::test]
   async fn test_更新で名前が上書きされる() {
      // Given
      let app = TestApp::new().await;
      let id = app.people.add_person("Anakin Skywalker");

      // When
      let (status, body) = app
         .request(
            "PUT",
            &format!("/people/{id}"),
            Some(json!({ "name": "Darth Vader" })),
         )
         .await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(body, json!({ "id": 1, "name": "Darth Vader" }));
      let (_, fetched) = app.get("/people/1").await;
      assert_eq!(fetched["name"], "Darth Vader");
   }

   #[tokio::test]
   async fn test_存在しないidの更新はerrorキーで404() {
      let app = TestApp::new().await;

      let (status, body) = app
         .request("PUT", "/people/9", Some(json!({ "name": "Yoda" })))
         .await;

      assert_eq!(status, 404);
      assert_eq!(body, json!({ "error": "Persona no encontrada" }));
   }

   #[tokio::test]
   async fn test_削除はsuccessキーで200() {
      // Given
      let app = TestApp::new().await;
      let id = app.people.add_person("Boba Fett");

      // When
      let (status, body) = app.request("DELETE", &format!("/people/{id}"), None).await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(body, json!({ "success": "Persona eliminado con éxito" }));
      assert!(app.people.is_empty());
   }

   #[tokio::test]
   async fn test_存在しないidの削除は404でストアを変更しない() {
      // Given
      let app = TestApp::new().await;
      app.people.add_person("Chewbacca");

      // When
      let (status, body) = app.request("DELETE", "/people/99", None).await;

      // Then
      assert_eq!(status, 404);
      assert_eq!(body, json!({ "error": "Persona no encontrada" }));
      assert_eq!(app.people.len(), 1);
   }

   #[tokio::test]
   async fn test_数値でないidは400() {
      let app = TestApp::new().await;

      let (status, _) = app.get("/people/luke").await;

      assert_eq!(status, 400);
   }

   #[tokio::test]
   async fn test_データベースエラーは詳細を隠して500() {
      // Given
      let app = TestApp::new().await;
      let mut deps = app.dependencies();
      deps.person_repository = Arc::new(UnavailablePersonRepository);

      // When
      let (status, body) = send(deps, "GET", "/people", None).await;

      // Then
      assert_eq!(status, 500);
      assert_eq!(body, json!({ "message": "Error interno del servidor" }));
   }
}
