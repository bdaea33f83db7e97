//! Configuración de conexión a SQLite
//!
//! Este módulo maneja el pool de conexiones y la creación del esquema
//! al arrancar (equivalente a una migración inicial idempotente).

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Crear un pool de conexiones a la base de datos
pub async fn create_pool(database_url: Option<&str>) -> Result<SqlitePool> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:mileage_tracker.db".to_string()),
    };

    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // Una base en memoria vive por conexión: el pool debe quedarse en una sola
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Crear las tablas si no existen. El vehículo es la raíz: las tablas hijas
/// declaran ON DELETE CASCADE.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vehicles (
            id BLOB PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            make TEXT NOT NULL,
            model TEXT NOT NULL,
            year INTEGER NOT NULL,
            license_plate TEXT,
            vin TEXT,
            fuel_type TEXT NOT NULL DEFAULT 'gasoline',
            tank_capacity_gallons REAL,
            current_mileage REAL NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            purchase_date TEXT,
            purchase_price REAL,
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS fillups (
            id BLOB PRIMARY KEY,
            vehicle_id BLOB NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            mileage REAL NOT NULL,
            gallons REAL NOT NULL,
            price_per_gallon REAL NOT NULL,
            total_cost REAL NOT NULL,
            fuel_brand TEXT,
            location TEXT,
            is_full_tank INTEGER NOT NULL DEFAULT 1,
            notes TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS maintenance_records (
            id BLOB PRIMARY KEY,
            vehicle_id BLOB NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            mileage REAL NOT NULL,
            service_type TEXT NOT NULL,
            description TEXT NOT NULL,
            cost REAL,
            provider TEXT,
            next_service_mileage REAL,
            next_service_date TEXT,
            notes TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS trips (
            id BLOB PRIMARY KEY,
            vehicle_id BLOB NOT NULL REFERENCES vehicles(id) ON DELETE CASCADE,
            start_date TEXT NOT NULL,
            end_date TEXT,
            start_mileage REAL NOT NULL,
            end_mileage REAL,
            distance REAL,
            purpose TEXT,
            start_location TEXT,
            end_location TEXT,
            notes TEXT,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
