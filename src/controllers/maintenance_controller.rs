//! Controller de registros de mantenimiento

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{
    CreateMaintenanceRequest, MaintenanceRecordListResponse, MaintenanceRecordResponse,
    UpdateMaintenanceRequest,
};
use crate::dto::ApiResponse;
use crate::models::maintenance::MaintenanceRecord;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicle_repository: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecordResponse>, AppError> {
        request.validate()?;

        self.vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            vehicle_id: request.vehicle_id,
            date: request.date.unwrap_or_else(Utc::now),
            mileage: request.mileage,
            service_type: request.service_type,
            description: request.description,
            cost: request.cost,
            provider: request.provider,
            next_service_mileage: request.next_service_mileage,
            next_service_date: request.next_service_date,
            notes: request.notes,
            created_at: Utc::now(),
        };

        self.repository.create(&record).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceRecordResponse::from(record),
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_all(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<MaintenanceRecordListResponse, AppError> {
        let records = self.repository.find_all_with_vehicle(skip, limit).await?;

        let records: Vec<MaintenanceRecordResponse> = records
            .into_iter()
            .map(MaintenanceRecordResponse::from)
            .collect();
        let total = records.len();

        Ok(MaintenanceRecordListResponse { records, total })
    }

    pub async fn list_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<MaintenanceRecordListResponse, AppError> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let records = self
            .repository
            .find_by_vehicle(vehicle_id, skip, limit)
            .await?;

        let records: Vec<MaintenanceRecordResponse> = records
            .into_iter()
            .map(MaintenanceRecordResponse::from)
            .collect();
        let total = records.len();

        Ok(MaintenanceRecordListResponse { records, total })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> Result<ApiResponse<MaintenanceRecordResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantenimiento no encontrado".to_string()))?;

        let updated = MaintenanceRecord {
            id: current.id,
            vehicle_id: current.vehicle_id,
            date: request.date.unwrap_or(current.date),
            mileage: request.mileage.unwrap_or(current.mileage),
            service_type: request.service_type.unwrap_or(current.service_type),
            description: request.description.unwrap_or(current.description),
            cost: request.cost.or(current.cost),
            provider: request.provider.or(current.provider),
            next_service_mileage: request
                .next_service_mileage
                .or(current.next_service_mileage),
            next_service_date: request.next_service_date.or(current.next_service_date),
            notes: request.notes.or(current.notes),
            created_at: current.created_at,
        };

        self.repository.update(&updated).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceRecordResponse::from(updated),
            "Mantenimiento actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(
                "Mantenimiento no encontrado".to_string(),
            ));
        }
        Ok(())
    }
}
