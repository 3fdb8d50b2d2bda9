//! ユーザー管理ユースケース

use std::sync::Arc;

use holocron_domain::{
    password::PlainPassword,
    user::{Email, NewUser, User},
};
use holocron_infra::{PasswordEncoder, repository::UserRepository};

use super::parse_required;
use crate::error::CoreError;

pub(crate) const USER_NOT_FOUND: &str = "Usuario no encontrado";
pub(crate) const USER_CREATED: &str = "Usuario agregado exitosamente";
const CREDENTIALS_REQUIRED: &str = "Se requieren los campos 'email' y 'password'";

/// ユーザー作成の入力
#[derive(Debug, Default)]
pub struct CreateUserInput {
    pub email:    Option<String>,
    pub password: Option<String>,
}

/// ユーザー管理ユースケース
pub struct UserUseCaseImpl {
    user_repository:  Arc<dyn UserRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl UserUseCaseImpl {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            user_repository,
            password_encoder,
        }
    }

    /// ユーザーを作成する
    ///
    /// 1. email / password の存在を検証
    /// 2. パスワードをハッシュ化（ブロッキングスレッドで実行）
    /// 3. `is_active = true` で挿入
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, CoreError> {
        let email = parse_required(input.email, CREDENTIALS_REQUIRED, Email::new)?;
        let password = match input.password {
            Some(p) if !p.is_empty() => PlainPassword::new(p)?,
            _ => return Err(CoreError::BadRequest(CREDENTIALS_REQUIRED.to_string())),
        };

        let encoder = Arc::clone(&self.password_encoder);
        let password = tokio::task::spawn_blocking(move || encoder.hash(&password))
            .await
            .map_err(|e| CoreError::Internal(format!("パスワードハッシュ化タスクが失敗しました: {e}")))??;

        let user = self
            .user_repository
            .insert(&NewUser { email, password })
            .await?;

        tracing::info!(user_id = %user.id(), "ユーザーを作成しました");
        Ok(user)
    }
}
