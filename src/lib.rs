use std::sync::Arc;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod store;
pub mod validation;

use store::PostStore;

/// Shared application state: the storage backend behind its trait object.
/// Everything else (signing secret, hash cost) is read-only configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_public_routes())
        // Identity-scoped API
        .merge(posts_routes())
        .merge(users_routes())
        // Global middleware; the identity resolver runs on every route
        .layer(axum::middleware::from_fn(middleware::identity_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::user_register))
        .route("/auth/login", post(auth::user_login))
}

fn posts_routes() -> Router<AppState> {
    use handlers::protected::posts;

    Router::new()
        // Collection operations
        .route("/api/posts", get(posts::posts_list).post(posts::post_create))
        // Individual post operations
        .route(
            "/api/posts/:id",
            get(posts::post_get)
                .put(posts::post_update)
                .delete(posts::post_delete),
        )
}

fn users_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::protected::users;

    Router::new()
        .route("/api/auth/whoami", get(users::user_whoami))
        .route("/api/users/status", put(users::status_put))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Feed API (Rust)",
            "version": version,
            "description": "JWT-authenticated content backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/auth/register, /auth/login (public - token acquisition)",
                "posts": "/api/posts[/:id] (protected)",
                "whoami": "/api/auth/whoami (protected)",
                "status": "/api/users/status (protected)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    let now = chrono::Utc::now();

    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now,
        }
    }))
}
