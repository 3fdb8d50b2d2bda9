//! # パスワードハッシュ化
//!
//! Argon2id によるパスワードのハッシュ化を提供する。
//!
//! ハッシュは PHC 形式の文字列（`$argon2id$v=19$m=19456,t=2,p=1$...`）で、
//! ソルトはハッシュ化のたびに OS の乱数源から生成する。

use argon2::{
    Algorithm,
    Argon2,
    Params,
    PasswordHasher as _,
    Version,
    password_hash::{SaltString, rand_core::OsRng},
};
use holocron_domain::password::{PasswordHash, PlainPassword};

use crate::InfraError;

/// パスワードのハッシュ化を担当するトレイト
pub trait PasswordEncoder: Send + Sync {
    /// 平文パスワードをハッシュ化する
    ///
    /// # Errors
    ///
    /// - ハッシュ計算に失敗した場合
    fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, InfraError>;
}

/// Argon2id によるパスワードハッシュ化の実装
///
/// argon2 クレートの既定パラメータ（RFC 9106 / OWASP 推奨値）を使用:
/// - Memory: 19 MiB
/// - Iterations: 2
/// - Parallelism: 1
pub struct Argon2PasswordEncoder {
    argon2: Argon2<'static>,
}

impl Argon2PasswordEncoder {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
        }
    }
}

impl Default for Argon2PasswordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, InfraError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_str().as_bytes(), &salt)
            .map_err(|e| InfraError::password_hash(e.to_string()))?;

        Ok(PasswordHash::new(hash.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordVerifier as _, password_hash::PasswordHash as Argon2PasswordHash};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_phc形式のargon2idハッシュを生成する() {
        let encoder = Argon2PasswordEncoder::new();
        let password = PlainPassword::new("usetheforce").unwrap();

        let hash = encoder.hash(&password).unwrap();

        assert!(hash.as_str().starts_with("$argon2id$v=19$"));
        assert!(!hash.as_str().contains("usetheforce"));
    }

    #[rstest]
    fn test_生成したハッシュで元のパスワードを検証できる() {
        let encoder = Argon2PasswordEncoder::new();
        let password = PlainPassword::new("usetheforce").unwrap();

        let hash = encoder.hash(&password).unwrap();
        let parsed = Argon2PasswordHash::new(hash.as_str()).unwrap();

        assert!(
            Argon2::default()
                .verify_password(b"usetheforce", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"darkside", &parsed)
                .is_err()
        );
    }

    #[rstest]
    fn test_同じパスワードでもソルトが異なればハッシュも異なる() {
        let encoder = Argon2PasswordEncoder::new();
        let password = PlainPassword::new("usetheforce").unwrap();

        let first = encoder.hash(&password).unwrap();
        let second = encoder.hash(&password).unwrap();

        assert_ne!(first, second);
    }
}
