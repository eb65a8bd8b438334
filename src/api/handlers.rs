use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Recipe, SuggestionRequest, SuggestionResponse},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get the recipe catalog
pub async fn get_recipes(State(state): State<AppState>) -> Json<Vec<Recipe>> {
    Json(state.recipes.as_ref().clone())
}

/// Suggest recipes for the posted ingredients
pub async fn suggest(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> AppResult<Json<SuggestionResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    tracing::info!(
        request_id = %request_id,
        ingredient_count = request.ingredients.len(),
        use_backtracking = request.use_backtracking,
        "Processing suggestion request"
    );

    // The cover search is CPU-bound and may run long on large catalogs
    let response = tokio::task::spawn_blocking(move || state.engine().suggest(&request))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(
        request_id = %request_id,
        mode = ?response.mode,
        suggestions = response.suggestions.len(),
        "Suggestion completed"
    );

    Ok(Json(response))
}
