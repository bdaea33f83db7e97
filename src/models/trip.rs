//! Modelo de Trip
//!
//! Un viaje nace "abierto" (sin end_date/end_mileage/distance) y pasa a
//! "completado" cuando se fija end_mileage; distance se recalcula siempre
//! desde start_mileage y end_mileage almacenados.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub start_mileage: f64,
    pub end_mileage: Option<f64>,
    pub distance: Option<f64>,
    pub purpose: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Viaje con el nombre del vehículo cargado para listados
#[derive(Debug, Clone, FromRow)]
pub struct TripWithVehicle {
    #[sqlx(flatten)]
    pub trip: Trip,
    pub vehicle_name: String,
}
