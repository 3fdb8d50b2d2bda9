//! # Holocron API サーバー
//!
//! ユーザー・人物・惑星と、それらを結ぶお気に入りを管理する REST API。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | No | PostgreSQL / SQLite 接続 URL（デフォルト: `sqlite:///tmp/test.db?mode=rwc`） |
//! | `RUST_LOG` | No | ログフィルタ |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（ローカルの SQLite ファイル）
//! cargo run -p holocron-api
//!
//! # PostgreSQL
//! PORT=3000 DATABASE_URL=postgresql://... cargo run -p holocron-api --release
//! ```

use axum::{ServiceExt, extract::Request};
use holocron_api::{
    app_builder::{AppDependencies, build_service},
    config::ApiConfig,
};
use holocron_infra::db::{self, DatabaseBackend};
use holocron_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベース接続とマイグレーション
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("holocron-api");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "holocron-api").entered();

    // 設定読み込み
    let config = ApiConfig::from_env()?;

    tracing::info!(
        "Holocron API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // データベース接続プールを作成し、スキーマを適用
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool, DatabaseBackend::from_url(&config.database_url)?).await?;
    tracing::info!("データベースに接続しました");

    // ルーター構築
    let app = build_service(AppDependencies::from_pool(pool));

    // サーバー起動
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Holocron API サーバーが起動しました: {}", addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
