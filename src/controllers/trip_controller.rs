//! Controller de viajes
//!
//! Máquina de estados abierto -> completado. La distancia siempre se
//! recalcula desde start_mileage y end_mileage almacenados; nunca se
//! confía en un valor previo.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{
    CompleteTripRequest, CreateTripRequest, TripListResponse, TripResponse, UpdateTripRequest,
};
use crate::dto::ApiResponse;
use crate::models::trip::Trip;
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct TripController {
    repository: TripRepository,
    vehicle_repository: VehicleRepository,
}

impl TripController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        self.vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Backfill: si el viaje ya viene con ambas lecturas, la distancia
        // se calcula de inmediato y pisa cualquier valor del payload
        let distance = match request.end_mileage {
            Some(end_mileage) => Some(end_mileage - request.start_mileage),
            None => request.distance,
        };

        let trip = Trip {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            start_date: request.start_date.unwrap_or_else(Utc::now),
            end_date: request.end_date,
            start_mileage: request.start_mileage,
            end_mileage: request.end_mileage,
            distance,
            purpose: request.purpose,
            start_location: request.start_location,
            end_location: request.end_location,
            notes: request.notes,
            created_at: Utc::now(),
        };

        self.repository.create(&trip).await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje iniciado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = self
            .repository
            .find_by_id_with_vehicle(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        Ok(TripResponse::from(trip))
    }

    pub async fn list_all(&self, skip: i64, limit: i64) -> Result<TripListResponse, AppError> {
        let trips = self.repository.find_all_with_vehicle(skip, limit).await?;

        let trips: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
        let total = trips.len();

        Ok(TripListResponse { trips, total })
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<TripListResponse, AppError> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let trips = self
            .repository
            .find_by_vehicle(vehicle_id, skip, limit)
            .await?;

        let trips: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
        let total = trips.len();

        Ok(TripListResponse { trips, total })
    }

    /// Completar un viaje: fija end_mileage y end_date, y recalcula la
    /// distancia desde el start_mileage almacenado aunque existiera una
    /// distancia vieja
    pub async fn complete(
        &self,
        id: Uuid,
        request: CompleteTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let mut trip = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        trip.end_mileage = Some(request.end_mileage);
        trip.end_date = Some(Utc::now());
        trip.distance = Some(request.end_mileage - trip.start_mileage);
        if let Some(end_location) = request.end_location {
            trip.end_location = Some(end_location);
        }

        self.repository.update(&trip).await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Viaje completado exitosamente".to_string(),
        ))
    }

    /// Actualización parcial. Si start_mileage o end_mileage viene en el
    /// payload, la distancia se recalcula con la mezcla resultante de
    /// valores nuevos y almacenados, solo si ambos quedan presentes.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Viaje no encontrado".to_string()))?;

        let mileage_changed = request.start_mileage.is_some() || request.end_mileage.is_some();

        let mut updated = Trip {
            id: current.id,
            vehicle_id: current.vehicle_id,
            start_date: request.start_date.unwrap_or(current.start_date),
            end_date: request.end_date.or(current.end_date),
            start_mileage: request.start_mileage.unwrap_or(current.start_mileage),
            end_mileage: request.end_mileage.or(current.end_mileage),
            distance: request.distance.or(current.distance),
            purpose: request.purpose.or(current.purpose),
            start_location: request.start_location.or(current.start_location),
            end_location: request.end_location.or(current.end_location),
            notes: request.notes.or(current.notes),
            created_at: current.created_at,
        };

        if mileage_changed {
            if let Some(end_mileage) = updated.end_mileage {
                updated.distance = Some(end_mileage - updated.start_mileage);
            }
        }

        self.repository.update(&updated).await?;

        Ok(ApiResponse::success_with_message(
            TripResponse::from(updated),
            "Viaje actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Viaje no encontrado".to_string()));
        }
        Ok(())
    }
}
