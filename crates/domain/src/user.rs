//! # ユーザー
//!
//! お気に入りの所有者となるユーザー。API からは作成と参照のみ可能で、
//! 更新・削除は提供しない。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use holocron_domain::{
//!     password::PasswordHash,
//!     user::{Email, User, UserId},
//! };
//!
//! let user = User::from_db(
//!     UserId::from_i64(1),
//!     Email::new("luke@rebellion.org")?,
//!     PasswordHash::new("$argon2id$..."),
//!     true,
//! );
//! assert!(user.is_active());
//! # Ok(())
//! # }
//! ```

use crate::password::PasswordHash;

define_serial_id! {
    /// ユーザー ID
    pub struct UserId;
}

define_text_value! {
    /// メールアドレス
    ///
    /// 形式の検証は行わない（存在チェックのみ）。
    pub struct Email(field = "email", redacted);
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:        UserId,
    email:     Email,
    password:  PasswordHash,
    is_active: bool,
}

/// 新規ユーザー（ID 採番前）
///
/// 作成時は常に `is_active = true` で保存される。
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email:    Email,
    pub password: PasswordHash,
}

impl User {
    /// 既存データから復元する
    pub fn from_db(id: UserId, email: Email, password: PasswordHash, is_active: bool) -> Self {
        Self {
            id,
            email,
            password,
            is_active,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}
