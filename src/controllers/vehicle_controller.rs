//! Controller de vehículos
//!
//! Valida los requests, aplica la regla de nombre único y orquesta el
//! repositorio.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehicle::{Vehicle, FUEL_TYPES};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_enum, validate_license_plate, validate_vin};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    fn validate_optional_fields(
        fuel_type: Option<&str>,
        license_plate: Option<&str>,
        vin: Option<&str>,
    ) -> Result<(), AppError> {
        if let Some(fuel_type) = fuel_type {
            validate_enum(fuel_type, FUEL_TYPES)
                .map_err(|e| validation_error("fuel_type", e))?;
        }
        if let Some(plate) = license_plate {
            validate_license_plate(plate).map_err(|e| validation_error("license_plate", e))?;
        }
        if let Some(vin) = vin {
            validate_vin(vin).map_err(|e| validation_error("vin", e))?;
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        Self::validate_optional_fields(
            request.fuel_type.as_deref(),
            request.license_plate.as_deref(),
            request.vin.as_deref(),
        )?;

        // El nombre del vehículo es único en todo el sistema
        if self.repository.find_by_name(&request.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Ya existe un vehículo con ese nombre".to_string(),
            ));
        }

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name: request.name,
            make: request.make,
            model: request.model,
            year: request.year,
            license_plate: request.license_plate,
            vin: request.vin,
            fuel_type: request
                .fuel_type
                .unwrap_or_else(|| "gasoline".to_string()),
            tank_capacity_gallons: request.tank_capacity_gallons,
            current_mileage: request.current_mileage.unwrap_or(0.0),
            is_active: request.is_active.unwrap_or(true),
            purchase_date: request.purchase_date,
            purchase_price: request.purchase_price,
            notes: request.notes,
            created_at: Utc::now(),
            updated_at: None,
        };

        self.repository.create(&vehicle).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<VehicleListResponse, AppError> {
        let vehicles = self.repository.find_all(skip, limit).await?;

        let vehicles: Vec<VehicleResponse> =
            vehicles.into_iter().map(VehicleResponse::from).collect();
        let total = vehicles.len();

        Ok(VehicleListResponse { vehicles, total })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;
        Self::validate_optional_fields(
            request.fuel_type.as_deref(),
            request.license_plate.as_deref(),
            request.vin.as_deref(),
        )?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        if let Some(name) = &request.name {
            if name != &current.name && self.repository.find_by_name(name).await?.is_some() {
                return Err(AppError::Conflict(
                    "Ya existe un vehículo con ese nombre".to_string(),
                ));
            }
        }

        let updated = Vehicle {
            id: current.id,
            name: request.name.unwrap_or(current.name),
            make: request.make.unwrap_or(current.make),
            model: request.model.unwrap_or(current.model),
            year: request.year.unwrap_or(current.year),
            license_plate: request.license_plate.or(current.license_plate),
            vin: request.vin.or(current.vin),
            fuel_type: request.fuel_type.unwrap_or(current.fuel_type),
            tank_capacity_gallons: request
                .tank_capacity_gallons
                .or(current.tank_capacity_gallons),
            current_mileage: request.current_mileage.unwrap_or(current.current_mileage),
            is_active: request.is_active.unwrap_or(current.is_active),
            purchase_date: request.purchase_date.or(current.purchase_date),
            purchase_price: request.purchase_price.or(current.purchase_price),
            notes: request.notes.or(current.notes),
            created_at: current.created_at,
            updated_at: Some(Utc::now()),
        };

        self.repository.update(&updated).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(updated),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Borrado físico: los fillups, mantenimientos y viajes del vehículo
    /// caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }
        Ok(())
    }
}
