//! Controller de estadísticas
//!
//! Capa delgada sobre el motor de estadísticas.

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::stats_dto::{DashboardStats, VehicleStats};
use crate::services::stats_service::StatsService;
use crate::utils::errors::AppError;

pub struct StatsController {
    service: StatsService,
}

impl StatsController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            service: StatsService::new(pool),
        }
    }

    pub async fn vehicle_stats(&self, vehicle_id: Uuid) -> Result<VehicleStats, AppError> {
        self.service.vehicle_stats(vehicle_id).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        self.service.dashboard_stats().await
    }
}
