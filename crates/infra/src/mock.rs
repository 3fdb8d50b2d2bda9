//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! holocron-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! ID は 1 から始まる連番で採番する（SQL 実装の自動採番と同じ振る舞い）。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use holocron_domain::{
   favorite::{Favorite, FavoriteId, FavoriteTarget, NewFavorite},
   password::{PasswordHash, PlainPassword},
   person::{NewPerson, Person, PersonId, PersonName},
   planet::{NewPlanet, Planet, PlanetId, PlanetName},
   user::{Email, NewUser, User, UserId},
};

use crate::{
   error::InfraError,
   password::PasswordEncoder,
   repository::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository},
};

/// 採番カウンタ付きのインメモリテーブル
#[derive(Debug)]
struct Table<T> {
   rows:    Vec<T>,
   next_id: i64,
}

impl<T> Default for Table<T> {
   fn default() -> Self {
      Self {
         rows:    Vec::new(),
         next_id: 1,
      }
   }
}

impl<T> Table<T> {
   fn allocate_id(&mut self) -> i64 {
      let id = self.next_id;
      self.next_id += 1;
      id
   }
}

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
   users: Arc<Mutex<Table<User>>>,
}

impl MockUserRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// テスト用にアクティブなユーザーを追加し、採番した ID を返す
   pub fn add_user(&self, email: &str) -> UserId {
      let mut table = self.users.lock().unwrap();
      let id = UserId::from_i64(table.allocate_id());
      table.rows.push(User::from_db(
         id,
         Email::new(email).unwrap(),
         PasswordHash::new("$argon2id$v=19$m=19456,t=2,p=1$dGVzdA$dGVzdA"),
         true,
      ));
      id
   }
}

#[async_trait]
impl UserRepository for MockUserRepository {
   async fn find_all(&self) -> Result<Vec<User>, InfraError> {
      Ok(self.users.lock().unwrap().rows.clone())
   }

   async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
      Ok(self
         .users
         .lock()
         .unwrap()
         .rows
         .iter()
         .find(|u| u.id() == id)
         .cloned())
   }

   async fn insert(&self, user: &NewUser) -> Result<User, InfraError> {
      let mut table = self.users.lock().unwrap();
      let created = User::from_db(
         UserId::from_i64(table.allocate_id()),
         user.email.clone(),
         user.password.clone(),
         true,
      );
      table.rows.push(created.clone());
      Ok(created)
   }
}

// ===== MockPersonRepository =====

#[derive(Clone, Default)]
pub struct MockPersonRepository {
   people: Arc<Mutex<Table<Person>>>,
}

impl MockPersonRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// テスト用に人物を追加し、採番した ID を返す
   pub fn add_person(&self, name: &str) -> PersonId {
      let mut table = self.people.lock().unwrap();
      let id = PersonId::from_i64(table.allocate_id());
      table.rows.push(Person::from_db(
         id,
         PersonName::new(name).unwrap(),
      ));
      id
   }

   /// 現在保持している人物の件数
   pub fn len(&self) -> usize {
      self.people.lock().unwrap().rows.len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
   async fn find_all(&self) -> Result<Vec<Person>, InfraError> {
      Ok(self.people.lock().unwrap().rows.clone())
   }

   async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, InfraError> {
      Ok(self
         .people
         .lock()
         .unwrap()
         .rows
         .iter()
         .find(|p| p.id() == id)
         .cloned())
   }

   async fn insert(&self, person: &NewPerson) -> Result<Person, InfraError> {
      let mut table = self.people.lock().unwrap();
      let created = Person::from_db(PersonId::from_i64(table.allocate_id()), person.name.clone());
      table.rows.push(created.clone());
      Ok(created)
   }

   async fn update(&self, person: &Person) -> Result<(), InfraError> {
      let mut table = self.people.lock().unwrap();
      if let Some(existing) = table.rows.iter_mut().find(|p| p.id() == person.id()) {
         *existing = person.clone();
      }
      Ok(())
   }

   async fn delete(&self, id: PersonId) -> Result<(), InfraError> {
      self.people.lock().unwrap().rows.retain(|p| p.id() != id);
      Ok(())
   }
}

// ===== MockPlanetRepository =====

#[derive(Clone, Default)]
pub struct MockPlanetRepository {
   planets: Arc<Mutex<Table<Planet>>>,
}

impl MockPlanetRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// テスト用に惑星を追加し、採番した ID を返す
   pub fn add_planet(&self, name: &str) -> PlanetId {
      let mut table = self.planets.lock().unwrap();
      let id = PlanetId::from_i64(table.allocate_id());
      table.rows.push(Planet::from_db(
         id,
         PlanetName::new(name).unwrap(),
      ));
      id
   }

   /// 現在保持している惑星の件数
   pub fn len(&self) -> usize {
      self.planets.lock().unwrap().rows.len()
   }

   pub fn is_empty(&self) -> bool {
      self.len() == 0
   }
}

#[async_trait]
impl PlanetRepository for MockPlanetRepository {
   async fn find_all(&self) -> Result<Vec<Planet>, InfraError> {
      Ok(self.planets.lock().unwrap().rows.clone())
   }

   async fn find_by_id(&self, id: PlanetId) -> Result<Option<Planet>, InfraError> {
      Ok(self
         .planets
         .lock()
         .unwrap()
         .rows
         .iter()
         .find(|p| p.id() == id)
         .cloned())
   }

   async fn insert(&self, planet: &NewPlanet) -> Result<Planet, InfraError> {
      let mut table = self.planets.lock().unwrap();
      let created = Planet::from_db(PlanetId::from_i64(table.allocate_id()), planet.name.clone());
      table.rows.push(created.clone());
      Ok(created)
   }

   async fn update(&self, planet: &Planet) -> Result<(), InfraError> {
      let mut table = self.planets.lock().unwrap();
      if let Some(existing) = table.rows.iter_mut().find(|p| p.id() == planet.id()) {
         *existing = planet.clone();
      }
      Ok(())
   }

   async fn delete(&self, id: PlanetId) -> Result<(), InfraError> {
      self.planets.lock().unwrap().rows.retain(|p| p.id() != id);
      Ok(())
   }
}

// ===== MockFavoriteRepository =====

#[derive(Clone, Default)]
pub struct MockFavoriteRepository {
   favorites: Arc<Mutex<Table<Favorite>>>,
}

impl MockFavoriteRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// テスト用にお気に入りを追加し、採番した ID を返す
   pub fn add_favorite(&self, user_id: UserId, target: FavoriteTarget) -> FavoriteId {
      let mut table = self.favorites.lock().unwrap();
      let id = FavoriteId::from_i64(table.allocate_id());
      table.rows.push(Favorite::from_db(id, user_id, target));
      id
   }

   /// 保持しているすべてのお気に入り（ID 順）
   pub fn all(&self) -> Vec<Favorite> {
      self.favorites.lock().unwrap().rows.clone()
   }
}

#[async_trait]
impl FavoriteRepository for MockFavoriteRepository {
   async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Favorite>, InfraError> {
      Ok(self
         .favorites
         .lock()
         .unwrap()
         .rows
         .iter()
         .filter(|f| f.user_id() == user_id)
         .cloned()
         .collect())
   }

   async fn find_by_user_and_target(
      &self,
      user_id: UserId,
      target: FavoriteTarget,
   ) -> Result<Option<Favorite>, InfraError> {
      Ok(self
         .favorites
         .lock()
         .unwrap()
         .rows
         .iter()
         .find(|f| f.user_id() == user_id && f.target() == target)
         .cloned())
   }

   async fn insert(&self, favorite: &NewFavorite) -> Result<Favorite, InfraError> {
      let mut table = self.favorites.lock().unwrap();
      let created = Favorite::from_db(
         FavoriteId::from_i64(table.allocate_id()),
         favorite.user_id,
         favorite.target,
      );
      table.rows.push(created.clone());
      Ok(created)
   }

   async fn delete(&self, id: FavoriteId) -> Result<(), InfraError> {
      self.favorites.lock().unwrap().rows.retain(|f| f.id() != id);
      Ok(())
   }
}

// ===== MockPasswordEncoder =====

/// 計算コストのかからないパスワードエンコーダ
///
/// `mock-hash:<平文>` 形式の文字列を返す。
#[derive(Clone, Copy, Default)]
pub struct MockPasswordEncoder;

impl PasswordEncoder for MockPasswordEncoder {
   fn hash(&self, password: &PlainPassword) -> Result<PasswordHash, InfraError> {
      Ok(PasswordHash::new(format!("mock-hash:{}", password.as_str())))
   }
}
