use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use mealweek_recipe::{CreateInput, RecipeRecord, UpdateInput};
use mealweek_shared::recipe::Recipe;
use serde_json::json;

use super::{ApiJson, ApiPath, AppState};
use crate::error::Result;

/// GET /api/recipes
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RecipeRecord>>> {
    Ok(Json(state.recipe_command.list().await?))
}

/// GET /api/recipes/{id}
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<RecipeRecord>> {
    Ok(Json(state.recipe_command.load(id).await?))
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateInput>,
) -> Result<impl IntoResponse> {
    let id = state.recipe_command.create(input).await?;
    let recipe = state.recipe_command.load(id).await?;

    Ok((StatusCode::CREATED, Json(recipe)))
}

/// PUT /api/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<UpdateInput>,
) -> Result<Json<RecipeRecord>> {
    state.recipe_command.update(id, input).await?;

    Ok(Json(state.recipe_command.load(id).await?))
}

/// DELETE /api/recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    state.recipe_command.delete(id).await?;

    Ok(Json(json!({"message": "Recipe deleted successfully"})))
}

/// POST /api/recipes/{id}/details
pub async fn details(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    let recipe: Recipe = state.recipe_command.load(id).await?.into();
    let details = state.expander.expand(&recipe).await?;

    tracing::info!(recipe.id = id, "Recipe details generated");

    Ok(Json(json!({"recipe_id": id, "details": details})))
}
