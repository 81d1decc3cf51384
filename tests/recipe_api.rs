use axum::http::{Method, StatusCode};
use serde_json::json;
use temp_dir::TempDir;

mod helpers;

use helpers::{StubExpander, send, send_raw};

#[tokio::test]
async fn test_recipe_crud() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"name": "Pho", "ingredients": ["rice noodles", "beef"]})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Pho");
    assert_eq!(body["ingredients"], json!(["rice noodles", "beef"]));
    assert_eq!(body["instructions"], "");

    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/recipes/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pho");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/recipes/{id}"),
        Some(json!({"instructions": "Simmer for 6 hours"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Pho");
    assert_eq!(body["instructions"], "Simmer for 6 hours");

    let (status, body) = send(&app, Method::GET, "/api/recipes", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, body) = send(&app, Method::DELETE, &format!("/api/recipes/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Recipe deleted successfully"}));

    let (status, body) = send(&app, Method::GET, &format!("/api/recipes/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Recipe not found"}));

    Ok(())
}

#[tokio::test]
async fn test_recipe_list_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    for name in ["Soup", "Salad"] {
        send(
            &app,
            Method::POST,
            "/api/recipes",
            Some(json!({"name": name, "ingredients": ["water"]})),
        )
        .await?;
    }

    let (_, body) = send(&app, Method::GET, "/api/recipes", None).await?;
    let names = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default().to_owned())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Salad", "Soup"]);

    Ok(())
}

#[tokio::test]
async fn test_recipe_validation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"name": "", "ingredients": []})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"].as_array().map(Vec::len), Some(2));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"ingredients": ["eggs"]})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (status, body) = send_raw(&app, Method::POST, "/api/recipes", Some("{not json")).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"name": "Toast", "ingredients": ["bread"]})),
    )
    .await?;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::PUT, &format!("/api/recipes/{id}"), Some(json!({}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let (status, body) = send(&app, Method::GET, "/api/recipes/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    Ok(())
}

#[tokio::test]
async fn test_recipe_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/recipes/99",
        Some(json!({"name": "Ghost"})),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Recipe not found"}));

    let (status, _) = send(&app, Method::DELETE, "/api/recipes/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn test_recipe_details() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"name": "Pho", "ingredients": ["noodles", "beef"]})),
    )
    .await?;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::POST, &format!("/api/recipes/{id}/details"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"recipe_id": id, "details": "How to cook Pho with noodles, beef"})
    );

    let (status, body) = send(&app, Method::POST, "/api/recipes/999/details", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Recipe not found"}));

    Ok(())
}

#[tokio::test]
async fn test_recipe_details_upstream_failure() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: true }).await?;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/recipes",
        Some(json!({"name": "Pho", "ingredients": ["noodles"]})),
    )
    .await?;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::POST, &format!("/api/recipes/{id}/details"), None).await?;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({"error": "Failed to generate recipe details"}));

    Ok(())
}

#[tokio::test]
async fn test_service_routes() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let app = helpers::setup_app(&dir, StubExpander { fail: false }).await?;

    let (status, body) = send(&app, Method::GET, "/", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["recipes"], "/api/recipes");

    let (status, body) = send(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["type"], "Recipe Planner API");
    assert!(body["timestamp"].is_string());
    assert!(body["environment"].is_string());

    let (status, _) = send(&app, Method::GET, "/ready", None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/api/unknown", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found"}));

    Ok(())
}
