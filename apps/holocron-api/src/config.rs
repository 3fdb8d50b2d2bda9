//! # API サーバー設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | デフォルト |
//! |--------|------|------------|
//! | `HOST` | No | `0.0.0.0` |
//! | `PORT` | No | `3000` |
//! | `DATABASE_URL` | No | [`DEFAULT_DATABASE_URL`] |

use std::env;

use thiserror::Error;

/// `DATABASE_URL` 未設定時の接続先（ローカルの SQLite ファイル）
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   #[error("PORT は有効なポート番号である必要があります: {0:?}")]
   InvalidPort(String),
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:         String,
   /// ポート番号
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_vars(
         env::var("HOST").ok(),
         env::var("PORT").ok(),
         env::var("DATABASE_URL").ok(),
      )
   }

   /// 値の組から設定を組み立てる
   ///
   /// 空文字列は未設定として扱う。
   fn from_vars(
      host: Option<String>,
      port: Option<String>,
      database_url: Option<String>,
   ) -> Result<Self, ConfigError> {
      let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

      let port = match non_empty(port) {
         Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw))?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         host: non_empty(host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         database_url: non_empty(database_url)
            .map_or_else(|| DEFAULT_DATABASE_URL.to_string(), normalize_database_url),
      })
   }
}

/// `postgres://` スキームを `postgresql://` に揃える
///
/// ホスティング環境が発行する URL は `postgres://` のことがあるため。
fn normalize_database_url(url: String) -> String {
   match url.strip_prefix("postgres://") {
      Some(rest) => format!("postgresql://{rest}"),
      None => url,
   }
}
