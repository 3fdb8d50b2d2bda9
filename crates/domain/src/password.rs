//! # パスワード
//!
//! 平文は [`PlainPassword`] としてユーザー作成の入力でだけ扱い、
//! ストアには [`PasswordHash`]（Argon2id の PHC 文字列）だけを渡す。
//! ハッシュ化そのものはインフラ層の責務。

use std::fmt;

use crate::DomainError;

/// ユーザー作成時に受け取った平文パスワード
///
/// ログに漏れないよう `Debug` では中身を出さない。前後の空白も値の一部として保持する。
#[derive(Clone)]
pub struct PlainPassword(String);

impl PlainPassword {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      if value.is_empty() {
         return Err(DomainError::Validation(
            "El campo 'password' es requerido".to_string(),
         ));
      }
      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Debug for PlainPassword {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("PlainPassword(<redacted>)")
   }
}

/// 保存済みのパスワードハッシュ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
   pub fn new(phc: impl Into<String>) -> Self {
      Self(phc.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

#[cfg(test)]
mod tests {
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case(" usetheforce ")]
   #[case("12345")]
   fn test_平文パスワードは空白も含めてそのまま保持する(#[case] raw: &str) {
      assert_eq!(PlainPassword::new(raw).unwrap().as_str(), raw);
   }

   #[rstest]
   fn test_空のパスワードはvalidationエラー() {
      let err = PlainPassword::new("").unwrap_err();

      assert!(matches!(err, DomainError::Validation(_)));
   }

   #[rstest]
   fn test_debug出力に平文が含まれない() {
      let debug = format!("{:?}", PlainPassword::new("darkside").unwrap());

      assert_eq!(debug, "PlainPassword(<redacted>)");
   }
}
