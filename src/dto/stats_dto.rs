//! DTOs de estadísticas
//!
//! Los campos Option representan resultados indefinidos (datos
//! insuficientes), nunca errores.

use serde::Serialize;
use uuid::Uuid;

/// Snapshot de estadísticas de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleStats {
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub total_mileage: f64,
    pub total_fillups: i64,
    pub total_fuel_cost: f64,
    pub average_mpg: Option<f64>,
    pub last_fillup_mileage: Option<f64>,
    pub last_service_mileage: Option<f64>,
    pub next_service_due: Option<f64>,
}

/// Estadísticas globales del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_vehicles: i64,
    pub total_mileage: f64,
    pub total_fuel_cost: f64,
    pub average_mpg: Option<f64>,
    pub recent_fillups: i64,
    pub upcoming_services: i64,
}
