use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, FromRequest, FromRequestParts},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use mealweek_expander::Expander;
use serde_json::json;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    middleware::{self, RateLimit},
};

mod health;
mod plans;
mod recipes;

pub use health::{health, ready};

const BODY_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub recipe_command: mealweek_recipe::Command,
    pub plan_command: mealweek_mealplan::Command,
    pub expander: Arc<dyn Expander>,
    pub pool: SqlitePool,
}

/// JSON body whose rejections are reported as validation failures.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters whose rejections are reported as validation failures.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Recipe Planner API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "ready": "/ready",
            "recipes": "/api/recipes",
            "plans": "/api/plans",
            "generate": "/api/plans/generate"
        }
    }))
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Route not found"})),
    )
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": "Method not allowed"})),
    )
}

pub fn router(app_state: AppState, rate_limit: RateLimit) -> anyhow::Result<Router> {
    let api = Router::new()
        .route(
            "/api/recipes",
            get(recipes::list)
                .post(recipes::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/recipes/{id}",
            get(recipes::show)
                .put(recipes::update)
                .delete(recipes::delete)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/recipes/{id}/details",
            post(recipes::details).fallback(method_not_allowed),
        )
        .route(
            "/api/plans",
            get(plans::list)
                .post(plans::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/plans/generate",
            post(plans::generate).fallback(method_not_allowed),
        )
        .route(
            "/api/plans/{id}",
            get(plans::show)
                .put(plans::update)
                .delete(plans::delete)
                .fallback(method_not_allowed),
        );
    let api = rate_limit.apply(api)?;

    let router = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index))
        .merge(api)
        .fallback(fallback)
        .layer(DefaultBodyLimit::max(BODY_LIMIT));

    Ok(middleware::security_headers(router).with_state(app_state))
}
