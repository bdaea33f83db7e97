//! Repositorio de fillups

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::fillup::{Fillup, FillupWithVehicle};
use crate::utils::errors::AppError;

pub struct FillupRepository {
    pool: SqlitePool,
}

impl FillupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, fillup: &Fillup) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO fillups (
                id, vehicle_id, date, mileage, gallons, price_per_gallon,
                total_cost, fuel_brand, location, is_full_tank, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fillup.id)
        .bind(fillup.vehicle_id)
        .bind(fillup.date)
        .bind(fillup.mileage)
        .bind(fillup.gallons)
        .bind(fillup.price_per_gallon)
        .bind(fillup.total_cost)
        .bind(&fillup.fuel_brand)
        .bind(&fillup.location)
        .bind(fillup.is_full_tank)
        .bind(&fillup.notes)
        .bind(fillup.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Fillup>, AppError> {
        let fillup = sqlx::query_as::<_, Fillup>("SELECT * FROM fillups WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(fillup)
    }

    /// Fillups de un vehículo, más recientes primero
    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Fillup>, AppError> {
        let fillups = sqlx::query_as::<_, Fillup>(
            "SELECT * FROM fillups WHERE vehicle_id = ? ORDER BY date DESC LIMIT ? OFFSET ?",
        )
        .bind(vehicle_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(fillups)
    }

    /// Fillups de un vehículo ordenados por kilometraje ascendente,
    /// el orden que consume el motor de estadísticas
    pub async fn find_by_vehicle_by_mileage(
        &self,
        vehicle_id: Uuid,
    ) -> Result<Vec<Fillup>, AppError> {
        let fillups = sqlx::query_as::<_, Fillup>(
            "SELECT * FROM fillups WHERE vehicle_id = ? ORDER BY mileage ASC",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fillups)
    }

    /// Todos los fillups con el vehículo cargado para display
    pub async fn find_all_with_vehicle(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<FillupWithVehicle>, AppError> {
        let fillups = sqlx::query_as::<_, FillupWithVehicle>(
            r#"
            SELECT f.*, v.name AS vehicle_name
            FROM fillups f
            INNER JOIN vehicles v ON v.id = f.vehicle_id
            ORDER BY f.date DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(fillups)
    }

    /// Costo total de combustible de TODO el store (no solo vehículos activos)
    pub async fn total_cost_all(&self) -> Result<f64, AppError> {
        let total =
            sqlx::query_scalar::<_, f64>("SELECT COALESCE(SUM(total_cost), 0.0) FROM fillups")
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    /// Cantidad de fillups desde una fecha (inclusive)
    pub async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fillups WHERE date >= ?")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn update(&self, fillup: &Fillup) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE fillups SET
                date = ?, mileage = ?, gallons = ?, price_per_gallon = ?,
                total_cost = ?, fuel_brand = ?, location = ?, is_full_tank = ?,
                notes = ?
            WHERE id = ?
            "#,
        )
        .bind(fillup.date)
        .bind(fillup.mileage)
        .bind(fillup.gallons)
        .bind(fillup.price_per_gallon)
        .bind(fillup.total_cost)
        .bind(&fillup.fuel_brand)
        .bind(&fillup.location)
        .bind(fillup.is_full_tank)
        .bind(&fillup.notes)
        .bind(fillup.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM fillups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
