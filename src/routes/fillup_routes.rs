use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::fillup_controller::FillupController;
use crate::dto::fillup_dto::{
    CreateFillupRequest, FillupListResponse, FillupResponse, UpdateFillupRequest,
};
use crate::dto::{ApiResponse, Pagination};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fillup_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fillup).get(list_fillups))
        .route("/:id", put(update_fillup).delete(delete_fillup))
}

async fn create_fillup(
    State(state): State<AppState>,
    Json(request): Json<CreateFillupRequest>,
) -> Result<Json<ApiResponse<FillupResponse>>, AppError> {
    let controller = FillupController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fillups(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<FillupListResponse>, AppError> {
    let controller = FillupController::new(state.pool.clone());
    let response = controller
        .list_all(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn update_fillup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFillupRequest>,
) -> Result<Json<ApiResponse<FillupResponse>>, AppError> {
    let controller = FillupController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fillup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FillupController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Fillup eliminado exitosamente"
    })))
}
