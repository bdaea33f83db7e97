//! DTOs de Trip

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::trip::{Trip, TripWithVehicle};

/// Request para iniciar un viaje. Si start_mileage y end_mileage vienen
/// juntos se calcula distance de inmediato (backfill de viajes históricos).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub start_mileage: f64,

    #[validate(range(min = 0.0))]
    pub end_mileage: Option<f64>,

    pub distance: Option<f64>,
    pub purpose: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub notes: Option<String>,
}

/// Request de actualización parcial. Si start_mileage o end_mileage viene
/// en el payload, distance se recalcula con los valores resultantes
/// (solo cuando ambos quedan presentes).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0))]
    pub start_mileage: Option<f64>,

    #[validate(range(min = 0.0))]
    pub end_mileage: Option<f64>,

    pub distance: Option<f64>,
    pub purpose: Option<String>,
    pub start_location: Option<String>,
    pub end_location: Option<String>,
    pub notes: Option<String>,
}

/// Request para completar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteTripRequest {
    #[validate(range(min = 0.0))]
    pub end_mileage: f64,

    pub end_location: Option<String>,
}

/// Response de viaje
#[derive(Debug, Serialize)]
pub struct TripResponse {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
}

/// Envoltura de listado de viajes
#[derive(Debug, Serialize)]
pub struct TripListResponse {
    pub trips: Vec<TripResponse>,
    pub total: usize,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            vehicle_id: trip.vehicle_id,
            start_date: trip.start_date,
            end_date: trip.end_date,
            start_mileage: trip.start_mileage,
            end_mileage: trip.end_mileage,
            distance: trip.distance,
            purpose: trip.purpose,
            start_location: trip.start_location,
            end_location: trip.end_location,
            notes: trip.notes,
            created_at: trip.created_at,
            vehicle_name: None,
        }
    }
}

impl From<TripWithVehicle> for TripResponse {
    fn from(row: TripWithVehicle) -> Self {
        let mut response = TripResponse::from(row.trip);
        response.vehicle_name = Some(row.vehicle_name);
        response
    }
}
