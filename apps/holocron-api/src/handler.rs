//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはリソースごとのサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは DTO の変換に専念し、検証と参照整合性チェックはユースケースに委譲
//! - 同じ操作に複数の URL 形状がある場合、ハンドラは URL からの値の取り出しだけを行い、
//!   共通の処理関数に委譲する

pub mod favorite;
pub mod health;
pub mod person;
pub mod planet;
pub mod sitemap;
pub mod user;

pub use favorite::{
    FavoriteState,
    add_favorite_person,
    add_favorite_person_by_path,
    add_favorite_planet,
    add_favorite_planet_by_path,
    list_favorites,
    remove_favorite_person,
    remove_favorite_planet,
    remove_user_favorite_person,
    remove_user_favorite_planet,
};
pub use health::{ReadinessState, health_check, readiness_check};
pub use person::{PersonState, create_person, delete_person, get_person, list_people, update_person};
pub use planet::{PlanetState, create_planet, delete_planet, get_planet, list_planets, update_planet};
pub use sitemap::{HttpMethod, RouteInfo, SitemapState, sitemap};
pub use user::{UserState, create_user, get_user, list_users};
