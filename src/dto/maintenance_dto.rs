//! DTOs de MaintenanceRecord

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::{MaintenanceRecord, MaintenanceRecordWithVehicle};

/// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub mileage: f64,

    #[validate(length(min = 1, max = 100))]
    pub service_type: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    pub provider: Option<String>,

    #[validate(range(min = 0.0))]
    pub next_service_mileage: Option<f64>,

    pub next_service_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Request para actualizar un mantenimiento (campos omitidos conservan
/// su valor)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub mileage: Option<f64>,

    #[validate(length(min = 1, max = 100))]
    pub service_type: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,

    pub provider: Option<String>,

    #[validate(range(min = 0.0))]
    pub next_service_mileage: Option<f64>,

    pub next_service_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Response de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceRecordResponse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
}

/// Envoltura de listado de mantenimientos
#[derive(Debug, Serialize)]
pub struct MaintenanceRecordListResponse {
    pub records: Vec<MaintenanceRecordResponse>,
    pub total: usize,
}

impl From<MaintenanceRecord> for MaintenanceRecordResponse {
    fn from(record: MaintenanceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            date: record.date,
            mileage: record.mileage,
            service_type: record.service_type,
            description: record.description,
            cost: record.cost,
            provider: record.provider,
            next_service_mileage: record.next_service_mileage,
            next_service_date: record.next_service_date,
            notes: record.notes,
            created_at: record.created_at,
            vehicle_name: None,
        }
    }
}

impl From<MaintenanceRecordWithVehicle> for MaintenanceRecordResponse {
    fn from(row: MaintenanceRecordWithVehicle) -> Self {
        let mut response = MaintenanceRecordResponse::from(row.record);
        response.vehicle_name = Some(row.vehicle_name);
        response
    }
}
