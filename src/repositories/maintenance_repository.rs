//! Repositorio de registros de mantenimiento

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::maintenance::{MaintenanceRecord, MaintenanceRecordWithVehicle};
use crate::utils::errors::AppError;

pub struct MaintenanceRepository {
    pool: SqlitePool,
}

impl MaintenanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &MaintenanceRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO maintenance_records (
                id, vehicle_id, date, mileage, service_type, description, cost,
                provider, next_service_mileage, next_service_date, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id)
        .bind(record.vehicle_id)
        .bind(record.date)
        .bind(record.mileage)
        .bind(&record.service_type)
        .bind(&record.description)
        .bind(record.cost)
        .bind(&record.provider)
        .bind(record.next_service_mileage)
        .bind(record.next_service_date)
        .bind(&record.notes)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Mantenimientos de un vehículo, más recientes primero
    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE vehicle_id = ? ORDER BY date DESC LIMIT ? OFFSET ?",
        )
        .bind(vehicle_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Todos los mantenimientos con el vehículo cargado para display
    pub async fn find_all_with_vehicle(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<MaintenanceRecordWithVehicle>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecordWithVehicle>(
            r#"
            SELECT m.*, v.name AS vehicle_name
            FROM maintenance_records m
            INNER JOIN vehicles v ON v.id = m.vehicle_id
            ORDER BY m.date DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Registro de mantenimiento más reciente por fecha
    pub async fn latest_by_date(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Option<MaintenanceRecord>, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE vehicle_id = ? ORDER BY date DESC LIMIT 1",
        )
        .bind(vehicle_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Menor next_service_mileage estrictamente mayor al umbral dado
    pub async fn next_service_after(
        &self,
        vehicle_id: Uuid,
        threshold: f64,
    ) -> Result<Option<f64>, AppError> {
        let next = sqlx::query_scalar::<_, Option<f64>>(
            r#"
            SELECT MIN(next_service_mileage)
            FROM maintenance_records
            WHERE vehicle_id = ?
              AND next_service_mileage IS NOT NULL
              AND next_service_mileage > ?
            "#,
        )
        .bind(vehicle_id)
        .bind(threshold)
        .fetch_one(&self.pool)
        .await?;

        Ok(next)
    }

    /// ¿Existe algún servicio proyectado a no más de mileage_limit?
    pub async fn has_upcoming_service(
        &self,
        vehicle_id: Uuid,
        mileage_limit: f64,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM maintenance_records
                WHERE vehicle_id = ?
                  AND next_service_mileage IS NOT NULL
                  AND next_service_mileage <= ?
            )
            "#,
        )
        .bind(vehicle_id)
        .bind(mileage_limit)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn update(&self, record: &MaintenanceRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE maintenance_records SET
                date = ?, mileage = ?, service_type = ?, description = ?,
                cost = ?, provider = ?, next_service_mileage = ?,
                next_service_date = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(record.date)
        .bind(record.mileage)
        .bind(&record.service_type)
        .bind(&record.description)
        .bind(record.cost)
        .bind(&record.provider)
        .bind(record.next_service_mileage)
        .bind(record.next_service_date)
        .bind(&record.notes)
        .bind(record.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
