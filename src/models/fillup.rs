//! Modelo de Fillup
//!
//! Un fillup pertenece a un vehículo. El flag is_full_tank determina si el
//! registro participa en el cálculo de MPG: un tanque parcial rompe la
//! relación galones/millas desde el fillup anterior.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Fillup {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: DateTime<Utc>,
    pub mileage: f64,
    pub gallons: f64,
    pub price_per_gallon: f64,
    pub total_cost: f64,
    pub fuel_brand: Option<String>,
    pub location: Option<String>,
    pub is_full_tank: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fillup con el nombre del vehículo cargado para listados
#[derive(Debug, Clone, FromRow)]
pub struct FillupWithVehicle {
    #[sqlx(flatten)]
    pub fillup: Fillup,
    pub vehicle_name: String,
}
