//! DTOs de Fillup

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fillup::{Fillup, FillupWithVehicle};

/// Request para registrar un fillup
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFillupRequest {
    pub vehicle_id: Uuid,
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub mileage: f64,

    #[validate(range(min = 0.0))]
    pub gallons: f64,

    #[validate(range(min = 0.0))]
    pub price_per_gallon: f64,

    #[validate(range(min = 0.0))]
    pub total_cost: f64,

    pub fuel_brand: Option<String>,
    pub location: Option<String>,
    pub is_full_tank: Option<bool>,
    pub notes: Option<String>,
}

/// Request para actualizar un fillup (PUT completo; campos omitidos
/// conservan su valor). El ratchet de kilometraje NO se re-ejecuta aquí.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFillupRequest {
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub mileage: Option<f64>,

    #[validate(range(min = 0.0))]
    pub gallons: Option<f64>,

    #[validate(range(min = 0.0))]
    pub price_per_gallon: Option<f64>,

    #[validate(range(min = 0.0))]
    pub total_cost: Option<f64>,

    pub fuel_brand: Option<String>,
    pub location: Option<String>,
    pub is_full_tank: Option<bool>,
    pub notes: Option<String>,
}

/// Response de fillup
#[derive(Debug, Serialize)]
pub struct FillupResponse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
}

/// Envoltura de listado de fillups
#[derive(Debug, Serialize)]
pub struct FillupListResponse {
    pub fillups: Vec<FillupResponse>,
    pub total: usize,
}

impl From<Fillup> for FillupResponse {
    fn from(fillup: Fillup) -> Self {
        Self {
            id: fillup.id,
            vehicle_id: fillup.vehicle_id,
            date: fillup.date,
            mileage: fillup.mileage,
            gallons: fillup.gallons,
            price_per_gallon: fillup.price_per_gallon,
            total_cost: fillup.total_cost,
            fuel_brand: fillup.fuel_brand,
            location: fillup.location,
            is_full_tank: fillup.is_full_tank,
            notes: fillup.notes,
            created_at: fillup.created_at,
            vehicle_name: None,
        }
    }
}

impl From<FillupWithVehicle> for FillupResponse {
    fn from(row: FillupWithVehicle) -> Self {
        let mut response = FillupResponse::from(row.fillup);
        response.vehicle_name = Some(row.vehicle_name);
        response
    }
}
