//! Modelo de Vehicle
//!
//! El vehículo es la entidad raíz del sistema: sus fillups, registros de
//! mantenimiento y viajes se eliminan en cascada junto con él.
//! Mapea exactamente a la tabla vehicles.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub fuel_type: String,
    pub tank_capacity_gallons: Option<f64>,
    // Ratchet: solo avanza via fillups, nunca retrocede
    pub current_mileage: f64,
    pub is_active: bool,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Tipos de combustible soportados
pub const FUEL_TYPES: &[&str] = &["gasoline", "diesel", "electric", "hybrid"];
