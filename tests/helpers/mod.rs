#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mealweek::{AppState, middleware::RateLimit};
use mealweek_expander::{Expander, ExpanderError};
use mealweek_shared::recipe::Recipe;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

/// Expander that answers without leaving the process.
pub struct StubExpander {
    pub fail: bool,
}

#[async_trait]
impl Expander for StubExpander {
    async fn expand(&self, recipe: &Recipe) -> Result<String, ExpanderError> {
        if self.fail {
            return Err(ExpanderError::MissingApiKey);
        }

        Ok(format!(
            "How to cook {} with {}",
            recipe.name,
            recipe.ingredients.join(", ")
        ))
    }
}

pub async fn setup_app(dir: &TempDir, expander: StubExpander) -> anyhow::Result<Router> {
    setup_app_with_limit(dir, expander, RateLimit::default()).await
}

pub async fn setup_app_with_limit(
    dir: &TempDir,
    expander: StubExpander,
    rate_limit: RateLimit,
) -> anyhow::Result<Router> {
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());

    let write_db = mealweek::create_write_pool(&url).await?;
    mealweek_db::migrate(&write_db).await?;
    let read_db = mealweek::create_read_pool(&url, 2).await?;

    let shared = mealweek_shared::State {
        read_db: read_db.clone(),
        write_db,
    };

    mealweek::routes::router(
        AppState {
            recipe_command: mealweek_recipe::Command::new(shared.clone()),
            plan_command: mealweek_mealplan::Command::new(shared),
            expander: Arc::new(expander),
            pool: read_db,
        },
        rate_limit,
    )
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let body = match body {
        Some(value) => Some(serde_json::to_string(&value)?),
        None => None,
    };

    send_raw(app, method, uri, body.as_deref()).await
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(raw) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(raw.to_owned())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body)?).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}
