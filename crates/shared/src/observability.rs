//! # ログ・トレーシング
//!
//! サービス起動時の subscriber 構築と、HTTP リクエスト単位のスパン生成を提供する。
//!
//! | 環境変数 | 既定値 | 内容 |
//! |----------|--------|------|
//! | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] | `EnvFilter` の指定 |
//! | `LOG_FORMAT` | `pretty` | `json` で 1 行 1 イベントの JSON 出力 |
//!
//! subscriber には [`tracing_error::ErrorLayer`] も積むため、インフラ層のエラーが
//! 取得する `SpanTrace` に呼び出し元のスパンが残る。

use std::str::FromStr;

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,holocron=debug,tower_http=debug";

/// ログの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 集約基盤向けの JSON
    Json,
    /// 端末向けの整形出力
    #[default]
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    /// 大文字小文字と前後の空白は区別しない。空文字列は既定値として扱う
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "" => Ok(Self::Pretty),
            other => Err(other.to_string()),
        }
    }
}

impl LogFormat {
    /// `LOG_FORMAT` を読む
    ///
    /// 解釈できない値は Pretty に倒す。subscriber がまだ無いので警告は stderr に出す。
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var("LOG_FORMAT") else {
            return Self::default();
        };
        raw.parse().unwrap_or_else(|unknown| {
            eprintln!("LOG_FORMAT={unknown:?} は解釈できないため pretty で出力します");
            Self::default()
        })
    }
}

/// subscriber 構築の設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// グローバル subscriber を登録する
///
/// プロセスで一度だけ呼ぶ。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::{
        EnvFilter,
        Layer as _,
        fmt,
        layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let output = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => fmt::layer().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(
        service = %config.service_name,
        format = ?config.log_format,
        "トレーシングを初期化しました"
    );
}

/// リクエストごとに INFO スパンを張り、応答時にステータスとレイテンシを記録する
#[cfg(feature = "observability")]
pub fn http_trace_layer() -> tower_http::trace::TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
> {
    use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
    use tracing::Level;

    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_formatは大文字小文字と空白を無視する() {
        assert_eq!(" Json\n".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("PRETTY".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_空のlog_formatは既定値() {
        assert_eq!("".parse::<LogFormat>(), Ok(LogFormat::default()));
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    #[test]
    fn test_未知のlog_formatは値を返してエラー() {
        assert_eq!("logfmt".parse::<LogFormat>(), Err("logfmt".to_string()));
    }
}
