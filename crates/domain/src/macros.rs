//! ID 型とテキスト値オブジェクトを生成する宣言型マクロ

use crate::DomainError;

/// DB 採番の整数 ID 型を定義する
///
/// `i64` をラップした Copy な Newtype を生成する。JSON では素の数値として、
/// `Display` では数字だけが出力される。
///
/// ID はストアが INSERT 時に採番するため、新規発行用のコンストラクタは持たない。
///
/// ```rust
/// use holocron_domain::person::PersonId;
///
/// let id = PersonId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_serial_id {
    (
        $(#[$attr:meta])*
        $vis:vis struct $Id:ident;
    ) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Id(i64);

        impl $Id {
            /// ストアの値から復元する
            pub fn from_i64(raw: i64) -> Self {
                Self(raw)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// 空白のみの値を拒否し、受け取った値をそのまま返す
///
/// 前後の空白も値の一部として保持する。エラーメッセージはクライアントにそのまま
/// 返るため、フィールド名を含める。
pub(crate) fn require_text(raw: String, field: &str) -> Result<String, DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "El campo '{field}' es requerido"
        )));
    }

    Ok(raw)
}

/// 検証済みテキストの値オブジェクトを定義する
///
/// 生成される型は [`require_text`] を通った文字列だけを保持する。
///
/// 末尾に `redacted` を付けると、`Debug` は中身を伏せ、`Display` は実装されない。
/// メールアドレスなどログに残したくない値に使う。
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use holocron_domain::{person::PersonName, user::Email};
///
/// let name = PersonName::new(" Luke Skywalker ")?;
/// assert_eq!(name.as_str(), " Luke Skywalker ");
///
/// let email = Email::new("luke@rebellion.org")?;
/// assert!(!format!("{email:?}").contains("rebellion"));
/// # Ok(())
/// # }
/// ```
macro_rules! define_text_value {
    (
        $(#[$attr:meta])*
        $vis:vis struct $Name:ident(field = $field:literal, redacted);
    ) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $Name(String);

        impl std::fmt::Debug for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(<redacted>)", stringify!($Name))
            }
        }

        define_text_value!(@accessors $Name, $field);
    };
    (
        $(#[$attr:meta])*
        $vis:vis struct $Name:ident(field = $field:literal);
    ) => {
        $(#[$attr])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(String);

        define_text_value!(@accessors $Name, $field);
    };
    (@accessors $Name:ident, $field:literal) => {
        impl $Name {
            /// 検証してから値オブジェクトを作る
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                $crate::macros::require_text(value.into(), $field).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}
