use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::stats_controller::StatsController;
use crate::dto::stats_dto::DashboardStats;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/stats", get(get_dashboard_stats))
}

async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, AppError> {
    let controller = StatsController::new(state.pool.clone());
    let response = controller.dashboard_stats().await?;
    Ok(Json(response))
}
