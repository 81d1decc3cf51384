use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use mealweek_mealplan::{CreateInput, PlanRecord, UpdateInput, WeeklyPlan};
use mealweek_recipe::RecipeRecord;
use serde_json::json;

use super::{ApiJson, ApiPath, AppState};
use crate::error::Result;

/// GET /api/plans
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PlanRecord>>> {
    Ok(Json(state.plan_command.list().await?))
}

/// GET /api/plans/{id}
pub async fn show(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<PlanRecord>> {
    Ok(Json(state.plan_command.load(id).await?))
}

/// POST /api/plans
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateInput>,
) -> Result<impl IntoResponse> {
    let id = state.plan_command.create(input).await?;
    let plan = state.plan_command.load(id).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

/// PUT /api/plans/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<UpdateInput>,
) -> Result<Json<PlanRecord>> {
    state.plan_command.update(id, input).await?;

    Ok(Json(state.plan_command.load(id).await?))
}

/// DELETE /api/plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<impl IntoResponse> {
    state.plan_command.delete(id).await?;

    Ok(Json(json!({"message": "Plan deleted successfully"})))
}

/// POST /api/plans/generate
///
/// Plans the week over every stored recipe. The result is returned, not saved.
pub async fn generate(State(state): State<AppState>) -> Result<Json<WeeklyPlan<RecipeRecord>>> {
    let recipes = state.recipe_command.list().await?;
    let plan = mealweek_mealplan::generate(&recipes);

    tracing::info!(recipes = recipes.len(), days = plan.len(), "Weekly plan generated");

    Ok(Json(plan))
}
