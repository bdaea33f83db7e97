//! DTOs de Vehicle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub fuel_type: Option<String>,

    #[validate(range(min = 0.0))]
    pub tank_capacity_gallons: Option<f64>,

    #[validate(range(min = 0.0))]
    pub current_mileage: Option<f64>,

    pub is_active: Option<bool>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
}

/// Request para actualizar un vehículo (PUT completo; los campos omitidos
/// conservan su valor actual)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub fuel_type: Option<String>,

    #[validate(range(min = 0.0))]
    pub tank_capacity_gallons: Option<f64>,

    #[validate(range(min = 0.0))]
    pub current_mileage: Option<f64>,

    pub is_active: Option<bool>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
}

/// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub fuel_type: String,
    pub tank_capacity_gallons: Option<f64>,
    pub current_mileage: f64,
    pub is_active: bool,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Envoltura de listado de vehículos
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
    pub total: usize,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            vin: vehicle.vin,
            fuel_type: vehicle.fuel_type,
            tank_capacity_gallons: vehicle.tank_capacity_gallons,
            current_mileage: vehicle.current_mileage,
            is_active: vehicle.is_active,
            purchase_date: vehicle.purchase_date,
            purchase_price: vehicle.purchase_price,
            notes: vehicle.notes,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
