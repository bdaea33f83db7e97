use axum::{
    extract::{Path, Query, State},
    routing::{post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceRecordListResponse, MaintenanceRecordResponse,
    UpdateMaintenanceRequest,
};
use crate::dto::{ApiResponse, Pagination};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_maintenance).get(list_maintenance))
        .route("/:id", put(update_maintenance).delete(delete_maintenance))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<MaintenanceRecordListResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller
        .list_all(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceRecordResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Mantenimiento eliminado exitosamente"
    })))
}
