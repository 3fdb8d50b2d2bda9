//! テスト共通フィクスチャ
//!
//! インメモリ SQLite を使用する統合テストで共通利用するセットアップと
//! シードデータ投入ヘルパー。Rust の統合テスト規約に従い `tests/common/mod.rs`
//! に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use holocron_domain::{
    password::PasswordHash,
    person::{NewPerson, PersonId, PersonName},
    planet::{NewPlanet, PlanetId, PlanetName},
    user::{Email, NewUser, UserId},
};
use holocron_infra::{
    db::{self, DatabaseBackend},
    repository::{
        PersonRepository,
        PlanetRepository,
        SqlPersonRepository,
        SqlPlanetRepository,
        SqlUserRepository,
        UserRepository,
    },
};
use sqlx::AnyPool;

/// マイグレーション適用済みのインメモリ SQLite プールを作成する
///
/// テストごとに独立したデータベースになる。
pub async fn setup_pool() -> AnyPool {
    let pool = db::create_pool("sqlite::memory:")
        .await
        .expect("プール作成に失敗");
    db::run_migrations(&pool, DatabaseBackend::Sqlite)
        .await
        .expect("マイグレーションに失敗");
    pool
}

/// テスト用ユーザーを作成する
pub async fn insert_user(pool: &AnyPool, email: &str) -> UserId {
    SqlUserRepository::new(pool.clone())
        .insert(&NewUser {
            email:    Email::new(email).unwrap(),
            password: PasswordHash::new("$argon2id$v=19$m=19456,t=2,p=1$dGVzdA$dGVzdA"),
        })
        .await
        .expect("ユーザー作成に失敗")
        .id()
}

/// テスト用の人物を作成する
pub async fn insert_person(pool: &AnyPool, name: &str) -> PersonId {
    SqlPersonRepository::new(pool.clone())
        .insert(&NewPerson {
            name: PersonName::new(name).unwrap(),
        })
        .await
        .expect("人物作成に失敗")
        .id()
}

/// テスト用の惑星を作成する
pub async fn insert_planet(pool: &AnyPool, name: &str) -> PlanetId {
    SqlPlanetRepository::new(pool.clone())
        .insert(&NewPlanet {
            name: PlanetName::new(name).unwrap(),
        })
        .await
        .expect("惑星作成に失敗")
        .id()
}
