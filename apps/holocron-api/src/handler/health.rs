//! # ヘルスチェックハンドラ
//!
//! - `GET /health` — Liveness Check（常に `"healthy"` を返す）
//! - `GET /health/ready` — Readiness Check（データベースへの疎通を確認）
//!
//! レスポンス型は [`holocron_shared::HealthResponse`] / [`holocron_shared::ReadinessResponse`] を参照。

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use holocron_infra::db;
use holocron_shared::{CheckStatus, HealthResponse, ReadinessResponse};
use sqlx::AnyPool;

const DATABASE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Readiness Check 用の State
pub struct ReadinessState {
   pub pool: AnyPool,
}

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check エンドポイント
///
/// 全チェック OK → 200、1 つでも失敗 → 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
   let checks = BTreeMap::from([("database".to_string(), check_database(&state.pool).await)]);
   let response = ReadinessResponse::from_checks(checks);

   let status = if response.is_ready() {
      StatusCode::OK
   } else {
      StatusCode::SERVICE_UNAVAILABLE
   };

   (status, Json(response))
}

/// `SELECT 1` でデータベースへの疎通を確認する（タイムアウト: 5 秒）
async fn check_database(pool: &AnyPool) -> CheckStatus {
   match tokio::time::timeout(DATABASE_CHECK_TIMEOUT, db::ping(pool)).await {
      Ok(Ok(())) => CheckStatus::Ok,
      Ok(Err(e)) => {
         tracing::warn!(error = %e, "readiness check: database ping failed");
         CheckStatus::Error
      }
      Err(_) => {
         tracing::warn!("readiness check: database check timed out");
         CheckStatus::Error
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use crate::test_utils::TestApp;

   #[tokio::test]
   async fn test_healthはバージョン付きでhealthyを返す() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app.get("/health").await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(
         body,
         json!({ "status": "healthy", "version": env!("CARGO_PKG_VERSION") })
      );
   }

   #[tokio::test]
   async fn test_データベースに接続できればready() {
      // Given
      let app = TestApp::new().await;

      // When
      let (status, body) = app.get("/health/ready").await;

      // Then
      assert_eq!(status, 200);
      assert_eq!(body, json!({ "status": "ready", "checks": { "database": "ok" } }));
   }

   #[tokio::test]
   async fn test_プールが閉じていれば503とnot_ready() {
      // Given
      let app = TestApp::new().await;
      app.pool.close().await;

      // When
      let (status, body) = app.get("/health/ready").await;

      // Then
      assert_eq!(status, 503);
      assert_eq!(
         body,
         json!({ "status": "not_ready", "checks": { "database": "error" } })
      );
   }
}
