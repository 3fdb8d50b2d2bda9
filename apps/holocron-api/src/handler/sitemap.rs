//! # サイトマップハンドラ
//!
//! `GET /` で登録済みの全ルートを機械可読な形式で返す。
//! ルート一覧はルーター構築に使うルート表から生成されるため、実際のルーティングと一致する。

use std::sync::Arc;

use axum::{Json, extract::State, routing::MethodFilter};
use serde::Serialize;

/// ルートの HTTP メソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
   Get,
   Post,
   Put,
   Delete,
}

impl HttpMethod {
   /// axum のメソッドフィルタに変換する
   pub fn filter(self) -> MethodFilter {
      match self {
         Self::Get => MethodFilter::GET,
         Self::Post => MethodFilter::POST,
         Self::Put => MethodFilter::PUT,
         Self::Delete => MethodFilter::DELETE,
      }
   }
}

/// サイトマップの 1 エントリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
   pub method: HttpMethod,
   pub path:   &'static str,
}

/// サイトマップの共有状態
pub struct SitemapState {
   pub routes: Vec<RouteInfo>,
}

/// サイトマップレスポンス
#[derive(Debug, Serialize)]
pub struct SitemapResponse {
   pub routes: Vec<RouteInfo>,
}

/// GET /
pub async fn sitemap(State(state): State<Arc<SitemapState>>) -> Json<SitemapResponse> {
   Json(SitemapResponse {
      routes: state.routes.clone(),
   })
}
