//! Controller de fillups
//!
//! Aplica el ratchet de kilometraje del vehículo: un fillup nuevo con
//! mileage mayor al current_mileage del vehículo lo avanza; uno menor
//! (con historia previa) se rechaza antes de persistir.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::fillup_dto::{
    CreateFillupRequest, FillupListResponse, FillupResponse, UpdateFillupRequest,
};
use crate::dto::ApiResponse;
use crate::models::fillup::Fillup;
use crate::repositories::fillup_repository::FillupRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct FillupController {
    repository: FillupRepository,
    vehicle_repository: VehicleRepository,
}

impl FillupController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: FillupRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFillupRequest,
    ) -> Result<ApiResponse<FillupResponse>, AppError> {
        request.validate()?;

        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // El kilometraje solo puede retroceder si el vehículo sigue en su
        // lectura inicial de cero
        if vehicle.current_mileage > 0.0 && request.mileage < vehicle.current_mileage {
            return Err(AppError::BadRequest(
                "El kilometraje no puede ser menor al kilometraje actual del vehículo".to_string(),
            ));
        }

        let fillup = Fillup {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            date: request.date.unwrap_or_else(Utc::now),
            mileage: request.mileage,
            gallons: request.gallons,
            price_per_gallon: request.price_per_gallon,
            total_cost: request.total_cost,
            fuel_brand: request.fuel_brand,
            location: request.location,
            is_full_tank: request.is_full_tank.unwrap_or(true),
            notes: request.notes,
            created_at: Utc::now(),
        };

        self.repository.create(&fillup).await?;

        // Ratchet: dos escrituras secuenciales, ambas seguras de repetir
        if fillup.mileage > vehicle.current_mileage {
            self.vehicle_repository
                .set_current_mileage(vehicle.id, fillup.mileage)
                .await?;
        }

        Ok(ApiResponse::success_with_message(
            FillupResponse::from(fillup),
            "Fillup registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_all(&self, skip: i64, limit: i64) -> Result<FillupListResponse, AppError> {
        let fillups = self.repository.find_all_with_vehicle(skip, limit).await?;

        let fillups: Vec<FillupResponse> = fillups.into_iter().map(FillupResponse::from).collect();
        let total = fillups.len();

        Ok(FillupListResponse { fillups, total })
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<FillupListResponse, AppError> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let fillups = self
            .repository
            .find_by_vehicle(vehicle_id, skip, limit)
            .await?;

        let fillups: Vec<FillupResponse> = fillups.into_iter().map(FillupResponse::from).collect();
        let total = fillups.len();

        Ok(FillupListResponse { fillups, total })
    }

    /// Actualización completa; el ratchet del vehículo no se re-ejecuta
    /// en ediciones
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFillupRequest,
    ) -> Result<ApiResponse<FillupResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fillup no encontrado".to_string()))?;

        let updated = Fillup {
            id: current.id,
            vehicle_id: current.vehicle_id,
            date: request.date.unwrap_or(current.date),
            mileage: request.mileage.unwrap_or(current.mileage),
            gallons: request.gallons.unwrap_or(current.gallons),
            price_per_gallon: request.price_per_gallon.unwrap_or(current.price_per_gallon),
            total_cost: request.total_cost.unwrap_or(current.total_cost),
            fuel_brand: request.fuel_brand.or(current.fuel_brand),
            location: request.location.or(current.location),
            is_full_tank: request.is_full_tank.unwrap_or(current.is_full_tank),
            notes: request.notes.or(current.notes),
            created_at: current.created_at,
        };

        self.repository.update(&updated).await?;

        Ok(ApiResponse::success_with_message(
            FillupResponse::from(updated),
            "Fillup actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Fillup no encontrado".to_string()));
        }
        Ok(())
    }
}
