//! Repositorio de vehículos
//!
//! Acceso a datos de la tabla vehicles. El borrado es físico y arrastra
//! en cascada fillups, mantenimientos y viajes (FK ON DELETE CASCADE).

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, vehicle: &Vehicle) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO vehicles (
                id, name, make, model, year, license_plate, vin, fuel_type,
                tank_capacity_gallons, current_mileage, is_active,
                purchase_date, purchase_price, notes, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.id)
        .bind(&vehicle.name)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.vin)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.tank_capacity_gallons)
        .bind(vehicle.current_mileage)
        .bind(vehicle.is_active)
        .bind(vehicle.purchase_date)
        .bind(vehicle.purchase_price)
        .bind(&vehicle.notes)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self, skip: i64, limit: i64) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_active(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE is_active = 1")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn update(&self, vehicle: &Vehicle) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE vehicles SET
                name = ?, make = ?, model = ?, year = ?, license_plate = ?,
                vin = ?, fuel_type = ?, tank_capacity_gallons = ?,
                current_mileage = ?, is_active = ?, purchase_date = ?,
                purchase_price = ?, notes = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&vehicle.name)
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.vin)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.tank_capacity_gallons)
        .bind(vehicle.current_mileage)
        .bind(vehicle.is_active)
        .bind(vehicle.purchase_date)
        .bind(vehicle.purchase_price)
        .bind(&vehicle.notes)
        .bind(Utc::now())
        .bind(vehicle.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Avanzar el kilometraje actual del vehículo (ratchet tras un fillup)
    pub async fn set_current_mileage(&self, id: Uuid, mileage: f64) -> Result<(), AppError> {
        sqlx::query("UPDATE vehicles SET current_mileage = ?, updated_at = ? WHERE id = ?")
            .bind(mileage)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
