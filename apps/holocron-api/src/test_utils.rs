//! ハンドラテスト用のアプリケーションハーネス
//!
//! モックリポジトリを注入したルーターに `oneshot` でリクエストを送り、
//! ステータスと JSON ボディを返す。モックは `Arc` で状態を共有するため、
//! リクエスト間でデータが引き継がれる。

use std::sync::Arc;

use axum::{
   body::Body,
   http::{Request, Response, StatusCode},
};
use holocron_infra::{
   db,
   mock::{
      MockFavoriteRepository,
      MockPasswordEncoder,
      MockPersonRepository,
      MockPlanetRepository,
      MockUserRepository,
   },
};
use serde_json::Value;
use sqlx::AnyPool;
use tower::ServiceExt;

use crate::{
   app_builder::{AppDependencies, build_service},
   handler::ReadinessState,
};

/// モックで構成したテスト用アプリケーション
pub(crate) struct TestApp {
   pub users:     MockUserRepository,
   pub people:    MockPersonRepository,
   pub planets:   MockPlanetRepository,
   pub favorites: MockFavoriteRepository,
   /// Readiness Check 用のインメモリ SQLite
   pub pool:      AnyPool,
}

impl TestApp {
   pub async fn new() -> Self {
      Self {
         users:     MockUserRepository::new(),
         people:    MockPersonRepository::new(),
         planets:   MockPlanetRepository::new(),
         favorites: MockFavoriteRepository::new(),
         pool:      db::create_pool("sqlite::memory:").await.unwrap(),
      }
   }

   /// モックを注入した依存を組み立てる
   pub fn dependencies(&self) -> AppDependencies {
      AppDependencies {
         user_repository:     Arc::new(self.users.clone()),
         person_repository:   Arc::new(self.people.clone()),
         planet_repository:   Arc::new(self.planets.clone()),
         favorite_repository: Arc::new(self.favorites.clone()),
         password_encoder:    Arc::new(MockPasswordEncoder),
         readiness_state:     Arc::new(ReadinessState {
            pool: self.pool.clone(),
         }),
      }
   }

   pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
      self.request("GET", uri, None).await
   }

   /// JSON ボディ付き（`None` ならボディなし）のリクエストを送る
   pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
      send(self.dependencies(), method, uri, body).await
   }

   /// 任意の文字列を JSON ボディとして送る
   pub async fn request_raw(&self, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
      let request = Request::builder()
         .method(method)
         .uri(uri)
         .header("content-type", "application/json")
         .body(Body::from(body.to_string()))
         .unwrap();

      into_parts(self.raw(request).await).await
   }

   /// 組み立て済みのリクエストを送り、レスポンスをそのまま返す
   pub async fn raw(&self, request: Request<Body>) -> Response<Body> {
      build_service(self.dependencies())
         .oneshot(request)
         .await
         .unwrap()
   }
}

/// 任意の依存でルーターを構築してリクエストを送る
pub(crate) async fn send(
   deps: AppDependencies,
   method: &str,
   uri: &str,
   body: Option<Value>,
) -> (StatusCode, Value) {
   let builder = Request::builder().method(method).uri(uri);
   let request = match body {
      Some(json) => builder
         .header("content-type", "application/json")
         .body(Body::from(serde_json::to_vec(&json).unwrap())),
      None => builder.body(Body::empty()),
   }
   .unwrap();

   let response = build_service(deps).oneshot(request).await.unwrap();
   into_parts(response).await
}

/// レスポンスをステータスとボディに分解する
///
/// JSON でないボディ（パス抽出の失敗など）は文字列として返す。
async fn into_parts(response: Response<Body>) -> (StatusCode, Value) {
   let status = response.status();
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let body = serde_json::from_slice(&bytes)
      .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
   (status, body)
}
