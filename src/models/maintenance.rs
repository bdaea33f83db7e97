//! Modelo de MaintenanceRecord
//!
//! Registro de mantenimiento de un vehículo, con la proyección opcional del
//! próximo servicio (next_service_mileage / next_service_date).

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: DateTime<Utc>,
    pub mileage: f64,
    pub service_type: String,
    pub description: String,
    pub cost: Option<f64>,
    pub provider: Option<String>,
    pub next_service_mileage: Option<f64>,
    pub next_service_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registro con el nombre del vehículo cargado para listados
#[derive(Debug, Clone, FromRow)]
pub struct MaintenanceRecordWithVehicle {
    #[sqlx(flatten)]
    pub record: MaintenanceRecord,
    pub vehicle_name: String,
}
