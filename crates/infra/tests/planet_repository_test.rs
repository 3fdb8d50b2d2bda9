//! PlanetRepository 統合テスト
//!
//! インメモリ SQLite に本番と同じマイグレーションを適用して実行する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p holocron-infra --test planet_repository_test
//! ```

mod common;

use common::{insert_planet, insert_user, setup_pool};
use holocron_domain::{
    favorite::{FavoriteTarget, NewFavorite},
    planet::{NewPlanet, PlanetId, PlanetName},
};
use holocron_infra::repository::{
    FavoriteRepository,
    PlanetRepository,
    SqlFavoriteRepository,
    SqlPlanetRepository,
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_挿入した惑星をidで取得できる() {
    let pool = setup_pool().await;
    let repo = SqlPlanetRepository::new(pool);

    let created = repo
        .insert(&NewPlanet {
            name: PlanetName::new("Tatooine").unwrap(),
        })
        .await
        .unwrap();
    let found = repo.find_by_id(created.id()).await.unwrap();

    assert_eq!(created.id(), PlanetId::from_i64(1));
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_存在しないidはnoneを返す() {
    let pool = setup_pool().await;
    let repo = SqlPlanetRepository::new(pool);

    let found = repo.find_by_id(PlanetId::from_i64(999)).await.unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn test_一覧は挿入順に並ぶ() {
    let pool = setup_pool().await;
    insert_planet(&pool, "Tatooine").await;
    insert_planet(&pool, "Alderaan").await;
    insert_planet(&pool, "Hoth").await;
    let repo = SqlPlanetRepository::new(pool);

    let planets = repo.find_all().await.unwrap();

    let names: Vec<&str> = planets.iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["Tatooine", "Alderaan", "Hoth"]);
}

#[tokio::test]
async fn test_存在しないidの削除は他の行に影響しない() {
    let pool = setup_pool().await;
    let id = insert_planet(&pool, "Naboo").await;
    let repo = SqlPlanetRepository::new(pool);

    repo.delete(PlanetId::from_i64(999)).await.unwrap();

    assert!(repo.find_by_id(id).await.unwrap().is_some());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_名前を更新できる() {
    let pool = setup_pool().await;
    let id = insert_planet(&pool, "Kessel").await;
    let repo = SqlPlanetRepository::new(pool);

    let planet = repo.find_by_id(id).await.unwrap().unwrap();
    let renamed = planet.with_name(PlanetName::new("Kessel Run").unwrap());
    repo.update(&renamed).await.unwrap();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.name().as_str(), "Kessel Run");
}

#[tokio::test]
async fn test_削除した惑星は取得できない() {
    let pool = setup_pool().await;
    let id = insert_planet(&pool, "Dagobah").await;
    let repo = SqlPlanetRepository::new(pool);

    repo.delete(id).await.unwrap();

    assert_eq!(repo.find_by_id(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_惑星を削除すると参照するお気に入りも削除される() {
    let pool = setup_pool().await;
    let user_id = insert_user(&pool, "luke@rebellion.org").await;
    let planet_id = insert_planet(&pool, "Endor").await;
    let favorites = SqlFavoriteRepository::new(pool.clone());
    favorites
        .insert(&NewFavorite {
            user_id,
            target: FavoriteTarget::Planet(planet_id),
        })
        .await
        .unwrap();

    SqlPlanetRepository::new(pool).delete(planet_id).await.unwrap();

    assert!(favorites.find_by_user(user_id).await.unwrap().is_empty());
}
