//! # アプリケーション構築
//!
//! DI（リポジトリ・ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。
//!
//! ルートは [`RouteEntry`] の表として定義し、ルーターとサイトマップ（`GET /`）の
//! 両方をこの表から生成する。

use std::sync::Arc;

use axum::{
    Router,
    handler::Handler,
    routing::{MethodRouter, on},
};
use holocron_infra::{
    Argon2PasswordEncoder,
    PasswordEncoder,
    repository::{
        FavoriteRepository,
        PersonRepository,
        PlanetRepository,
        SqlFavoriteRepository,
        SqlPersonRepository,
        SqlPlanetRepository,
        SqlUserRepository,
        UserRepository,
    },
};
use holocron_shared::observability::http_trace_layer;
use sqlx::AnyPool;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
};

use crate::{
    handler::{
        FavoriteState,
        HttpMethod,
        PersonState,
        PlanetState,
        ReadinessState,
        RouteInfo,
        SitemapState,
        UserState,
        add_favorite_person,
        add_favorite_person_by_path,
        add_favorite_planet,
        add_favorite_planet_by_path,
        create_person,
        create_planet,
        create_user,
        delete_person,
        delete_planet,
        get_person,
        get_planet,
        get_user,
        health_check,
        list_favorites,
        list_people,
        list_planets,
        list_users,
        readiness_check,
        remove_favorite_person,
        remove_favorite_planet,
        remove_user_favorite_person,
        remove_user_favorite_planet,
        sitemap,
        update_person,
        update_planet,
    },
    usecase::{FavoriteUseCaseImpl, PersonUseCaseImpl, PlanetUseCaseImpl, UserUseCaseImpl},
};

/// ルーター構築に必要な依存
///
/// 本番では [`AppDependencies::from_pool`] で SQL 実装を注入し、
/// テストではモックリポジトリを注入する。
pub struct AppDependencies {
    pub user_repository:     Arc<dyn UserRepository>,
    pub person_repository:   Arc<dyn PersonRepository>,
    pub planet_repository:   Arc<dyn PlanetRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub password_encoder:    Arc<dyn PasswordEncoder>,
    pub readiness_state:     Arc<ReadinessState>,
}

impl AppDependencies {
    /// 接続プールから本番用の依存を組み立てる
    pub fn from_pool(pool: AnyPool) -> Self {
        Self {
            user_repository:     Arc::new(SqlUserRepository::new(pool.clone())),
            person_repository:   Arc::new(SqlPersonRepository::new(pool.clone())),
            planet_repository:   Arc::new(SqlPlanetRepository::new(pool.clone())),
            favorite_repository: Arc::new(SqlFavoriteRepository::new(pool.clone())),
            password_encoder:    Arc::new(Argon2PasswordEncoder::new()),
            readiness_state:     Arc::new(ReadinessState { pool }),
        }
    }
}

/// ルート表の 1 行
pub struct RouteEntry {
    pub info: RouteInfo,
    endpoint: MethodRouter,
}

impl RouteEntry {
    /// ハンドラと State を束ねたルートを作る
    fn new<H, T, S>(method: HttpMethod, path: &'static str, handler: H, state: S) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        Self {
            info:     RouteInfo { method, path },
            endpoint: on(method.filter(), handler).with_state(state),
        }
    }
}

/// DI コンテナの構築とルート表の定義を行う
///
/// 同じ操作に 2 つの URL 形状があるものは、両方の行を同じ共通処理に向ける。
pub fn build_routes(deps: AppDependencies) -> Vec<RouteEntry> {
    use HttpMethod::{Delete, Get, Post, Put};

    let user_state = Arc::new(UserState {
        user_repository: deps.user_repository.clone(),
        usecase:         UserUseCaseImpl::new(
            deps.user_repository.clone(),
            deps.password_encoder,
        ),
    });

    let person_state = Arc::new(PersonState {
        person_repository: deps.person_repository.clone(),
        usecase:           PersonUseCaseImpl::new(deps.person_repository.clone()),
    });

    let planet_state = Arc::new(PlanetState {
        planet_repository: deps.planet_repository.clone(),
        usecase:           PlanetUseCaseImpl::new(deps.planet_repository.clone()),
    });

    // お気に入りの追加・一覧はユーザーと参照先の存在確認に全リポジトリを使う
    let favorite_state = Arc::new(FavoriteState {
        usecase: FavoriteUseCaseImpl::new(
            deps.favorite_repository,
            deps.user_repository,
            deps.person_repository,
            deps.planet_repository,
        ),
    });

    let mut routes = vec![
        // ヘルスチェック
        RouteEntry::new(Get, "/health", health_check, ()),
        RouteEntry::new(Get, "/health/ready", readiness_check, deps.readiness_state),
        // ユーザー API
        RouteEntry::new(Get, "/users", list_users, user_state.clone()),
        RouteEntry::new(Post, "/users", create_user, user_state.clone()),
        RouteEntry::new(Get, "/users/{id}", get_user, user_state),
        // 人物 API
        RouteEntry::new(Get, "/people", list_people, person_state.clone()),
        RouteEntry::new(Post, "/people", create_person, person_state.clone()),
        RouteEntry::new(Get, "/people/{id}", get_person, person_state.clone()),
        RouteEntry::new(Put, "/people/{id}", update_person, person_state.clone()),
        RouteEntry::new(Delete, "/people/{id}", delete_person, person_state),
        // 惑星 API
        RouteEntry::new(Get, "/planets", list_planets, planet_state.clone()),
        RouteEntry::new(Post, "/planets", create_planet, planet_state.clone()),
        RouteEntry::new(Get, "/planets/{id}", get_planet, planet_state.clone()),
        RouteEntry::new(Put, "/planets/{id}", update_planet, planet_state.clone()),
        RouteEntry::new(Delete, "/planets/{id}", delete_planet, planet_state),
        // お気に入り API
        RouteEntry::new(
            Post,
            "/favorite/planet",
            add_favorite_planet,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Post,
            "/favorite/planet/{id}",
            add_favorite_planet_by_path,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Post,
            "/favorite/people",
            add_favorite_person,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Post,
            "/favorite/people/{id}",
            add_favorite_person_by_path,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Delete,
            "/favorite/planet/{id}",
            remove_favorite_planet,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Delete,
            "/{user_id}/favorite/planet/{id}",
            remove_user_favorite_planet,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Delete,
            "/favorite/people/{id}",
            remove_favorite_person,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Delete,
            "/{user_id}/favorite/people/{id}",
            remove_user_favorite_person,
            favorite_state.clone(),
        ),
        RouteEntry::new(
            Get,
            "/favorites/{user_id}",
            list_favorites,
            favorite_state.clone(),
        ),
        RouteEntry::new(Get, "/{user_id}/favorites", list_favorites, favorite_state),
    ];

    // サイトマップは自分自身を含む全ルートを列挙する
    let sitemap_info = RouteInfo {
        method: Get,
        path:   "/",
    };
    let sitemap_state = Arc::new(SitemapState {
        routes: std::iter::once(sitemap_info)
            .chain(routes.iter().map(|route| route.info))
            .collect(),
    });
    routes.insert(0, RouteEntry::new(Get, "/", sitemap, sitemap_state));

    routes
}

/// ルーターを構築する
///
/// CORS は全ルートで許可する。HTTP リクエストごとに TraceLayer のスパンを作る。
pub fn build_app(deps: AppDependencies) -> Router {
    build_routes(deps)
        .into_iter()
        .fold(Router::new(), |router, route| {
            router.route(route.info.path, route.endpoint)
        })
        .layer(http_trace_layer())
        .layer(CorsLayer::permissive())
}

/// 末尾スラッシュを無視するサービスを構築する
///
/// `NormalizePathLayer` はルーティングより前に URI を書き換える必要があるため、
/// `Router::layer` ではなくルーター全体を包む。
pub fn build_service(deps: AppDependencies) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_app(deps))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::test_utils::TestApp;

    #[tokio::test]
    async fn test_人物の作成から削除までの一連の流れ() {
        // Given
        let app = TestApp::new().await;

        // When / Then: 作成
        let (status, body) = app
            .request("POST", "/people", Some(json!({ "name": "Luke" })))
            .await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "id": 1, "name": "Luke" }));

        // 取得
        let (status, body) = app.get("/people/1").await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "id": 1, "name": "Luke" }));

        // 削除
        let (status, body) = app.request("DELETE", "/people/1", None).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({ "success": "Persona eliminado con éxito" }));

        // 削除後の取得
        let (status, body) = app.get("/people/1").await;
        assert_eq!(status, 404);
        assert_eq!(body, json!({ "message": "Persona no encontrada" }));
    }

    #[tokio::test]
    async fn test_作成して更新した名前が取得できる() {
        let app = TestApp::new().await;
        app.request("POST", "/planets", Some(json!({ "name": "Kamino" })))
            .await;

        app.request("PUT", "/planets/1", Some(json!({ "name": "Kashyyyk" })))
            .await;
        let (status, body) = app.get("/planets/1").await;

        assert_eq!(status, 200);
        assert_eq!(body["name"], "Kashyyyk");
    }

    #[tokio::test]
    async fn test_存在しないユーザーでの惑星お気に入り追加は404() {
        // Given: 惑星 5 もユーザー 1 も存在しない
        let app = TestApp::new().await;

        // When
        let (status, body) = app
            .request(
                "POST",
                "/favorite/planet",
                Some(json!({ "user_id": 1, "planet_id": 5 })),
            )
            .await;

        // Then
        assert_eq!(status, 404);
        assert_eq!(body, json!({ "error": "Usuario o planeta no encontrado" }));
    }

    #[tokio::test]
    async fn test_ユーザー作成からお気に入り一覧までの一連の流れ() {
        // Given
        let app = TestApp::new().await;
        app.request(
            "POST",
            "/users",
            Some(json!({ "email": "luke@rebellion.org", "password": "usetheforce" })),
        )
        .await;
        app.request("POST", "/planets", Some(json!({ "name": "Tatooine" })))
            .await;
        app.request("POST", "/people", Some(json!({ "name": "Obi-Wan" })))
            .await;

        // When
        let (planet_status, _) = app
            .request("POST", "/favorite/planet/1", Some(json!({ "user_id": 1 })))
            .await;
        let (person_status, _) = app
            .request(
                "POST",
                "/favorite/people",
                Some(json!({ "user_id": 1, "people_id": 1 })),
            )
            .await;
        let (status, body) = app.get("/1/favorites").await;

        // Then
        assert_eq!(planet_status, 200);
        assert_eq!(person_status, 200);
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!([
                { "id": 1, "user_id": 1, "people_id": null, "planet_id": 1 },
                { "id": 2, "user_id": 1, "people_id": 1, "planet_id": null }
            ])
        );
    }

    #[tokio::test]
    async fn test_末尾スラッシュは無視される() {
        // Given
        let app = TestApp::new().await;
        app.people.add_person("Yoda");

        // When
        let (list_status, list) = app.get("/people/").await;
        let (get_status, person) = app.get("/people/1/").await;

        // Then
        assert_eq!(list_status, 200);
        assert_eq!(list, json!([{ "id": 1, "name": "Yoda" }]));
        assert_eq!(get_status, 200);
        assert_eq!(person, json!({ "id": 1, "name": "Yoda" }));
    }

    #[tokio::test]
    async fn test_登録されていないメソッドは405() {
        let app = TestApp::new().await;

        let (status, _) = app.request("PATCH", "/people/1", None).await;

        assert_eq!(status, 405);
    }

    #[tokio::test]
    async fn test_corsヘッダが付与される() {
        // Given
        let app = TestApp::new().await;

        // When
        let response = app
            .raw(
                axum::http::Request::builder()
                    .method("GET")
                    .uri("/people")
                    .header("origin", "http://localhost:5173")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await;

        // Then
        assert_eq!(
            response.headers()["access-control-allow-origin"],
            "*"
        );
    }
}
