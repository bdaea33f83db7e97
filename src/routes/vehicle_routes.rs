use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::fillup_controller::FillupController;
use crate::controllers::maintenance_controller::MaintenanceController;
use crate::controllers::stats_controller::StatsController;
use crate::controllers::trip_controller::TripController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::fillup_dto::FillupListResponse;
use crate::dto::maintenance_dto::MaintenanceRecordListResponse;
use crate::dto::stats_dto::VehicleStats;
use crate::dto::trip_dto::TripListResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleResponse,
};
use crate::dto::{ApiResponse, Pagination};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/stats", get(get_vehicle_stats))
        .route("/:id/fillups", get(list_vehicle_fillups))
        .route("/:id/maintenance", get(list_vehicle_maintenance))
        .route("/:id/trips", get(list_vehicle_trips))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller
        .list(pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn get_vehicle_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleStats>, AppError> {
    let controller = StatsController::new(state.pool.clone());
    let response = controller.vehicle_stats(id).await?;
    Ok(Json(response))
}

async fn list_vehicle_fillups(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<FillupListResponse>, AppError> {
    let controller = FillupController::new(state.pool.clone());
    let response = controller
        .list_by_vehicle(id, pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn list_vehicle_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<MaintenanceRecordListResponse>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller
        .list_by_vehicle(id, pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}

async fn list_vehicle_trips(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<TripListResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller
        .list_by_vehicle(id, pagination.skip(), pagination.limit())
        .await?;
    Ok(Json(response))
}
