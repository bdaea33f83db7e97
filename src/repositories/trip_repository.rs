//! Repositorio de viajes

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::trip::{Trip, TripWithVehicle};
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: SqlitePool,
}

impl TripRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trip: &Trip) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO trips (
                id, vehicle_id, start_date, end_date, start_mileage, end_mileage,
                distance, purpose, start_location, end_location, notes, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.id)
        .bind(trip.vehicle_id)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.start_mileage)
        .bind(trip.end_mileage)
        .bind(trip.distance)
        .bind(&trip.purpose)
        .bind(&trip.start_location)
        .bind(&trip.end_location)
        .bind(&trip.notes)
        .bind(trip.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(trip)
    }

    pub async fn find_by_id_with_vehicle(
        &self,
        id: Uuid,
    ) -> Result<Option<TripWithVehicle>, AppError> {
        let trip = sqlx::query_as::<_, TripWithVehicle>(
            r#"
            SELECT t.*, v.name AS vehicle_name
            FROM trips t
            INNER JOIN vehicles v ON v.id = t.vehicle_id
            WHERE t.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    /// Viajes de un vehículo, más recientes primero
    pub async fn find_by_vehicle(
        &self,
        vehicle_id: Uuid,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE vehicle_id = ? ORDER BY start_date DESC LIMIT ? OFFSET ?",
        )
        .bind(vehicle_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    /// Todos los viajes con el vehículo cargado para display
    pub async fn find_all_with_vehicle(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<TripWithVehicle>, AppError> {
        let trips = sqlx::query_as::<_, TripWithVehicle>(
            r#"
            SELECT t.*, v.name AS vehicle_name
            FROM trips t
            INNER JOIN vehicles v ON v.id = t.vehicle_id
            ORDER BY t.start_date DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn update(&self, trip: &Trip) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE trips SET
                start_date = ?, end_date = ?, start_mileage = ?, end_mileage = ?,
                distance = ?, purpose = ?, start_location = ?, end_location = ?,
                notes = ?
            WHERE id = ?
            "#,
        )
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.start_mileage)
        .bind(trip.end_mileage)
        .bind(trip.distance)
        .bind(&trip.purpose)
        .bind(&trip.start_location)
        .bind(&trip.end_location)
        .bind(&trip.notes)
        .bind(trip.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
