//! Motor de estadísticas
//!
//! Funciones puras sobre los registros recuperados (MPG, costo por milla,
//! intervalos de servicio) más el servicio que arma los snapshots por
//! vehículo y del dashboard. Un resultado indefinido por datos
//! insuficientes es None, nunca un error.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::stats_dto::{DashboardStats, VehicleStats};
use crate::models::fillup::Fillup;
use crate::repositories::fillup_repository::FillupRepository;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

/// Millas de margen para considerar un servicio "próximo" en el dashboard
const UPCOMING_SERVICE_MARGIN: f64 = 1000.0;

/// Calcular el MPG promedio a partir de los fillups de un vehículo.
///
/// Promedio ponderado sobre los intervalos tanque-lleno a tanque-lleno:
/// un par consecutivo solo califica si AMBOS fillups son de tanque lleno,
/// y los galones consumidos en el intervalo son los comprados en el fillup
/// anterior del par. Pares con millas o galones no positivos se descartan
/// para que datos malos no corrompan el agregado.
pub fn calculate_mpg(fillups: &[Fillup]) -> Option<f64> {
    if fillups.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&Fillup> = fillups.iter().collect();
    sorted.sort_by(|a, b| {
        a.mileage
            .partial_cmp(&b.mileage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut total_miles = 0.0;
    let mut total_gallons = 0.0;

    for pair in sorted.windows(2) {
        let (previous, current) = (pair[0], pair[1]);
        if !(previous.is_full_tank && current.is_full_tank) {
            continue;
        }

        let miles = current.mileage - previous.mileage;
        let gallons = previous.gallons;
        if miles > 0.0 && gallons > 0.0 {
            total_miles += miles;
            total_gallons += gallons;
        }
    }

    if total_gallons > 0.0 {
        Some(total_miles / total_gallons)
    } else {
        None
    }
}

/// Costo promedio por milla de una secuencia de fillups.
///
/// total_miles se obtiene como (suma de mileage sin el primero) menos
/// (suma de mileage sin el último); eso solo representa distancia real si
/// el caller entrega los fillups contiguos y ordenados por kilometraje
/// ascendente. A diferencia de calculate_mpg, aquí no se ordena ni se
/// filtra por tanque lleno.
pub fn calculate_cost_per_mile(fillups: &[Fillup]) -> Option<f64> {
    if fillups.is_empty() {
        return None;
    }

    let total_cost: f64 = fillups.iter().map(|f| f.total_cost).sum();

    let total_miles = if fillups.len() > 1 {
        let all_but_first: f64 = fillups[1..].iter().map(|f| f.mileage).sum();
        let all_but_last: f64 = fillups[..fillups.len() - 1].iter().map(|f| f.mileage).sum();
        all_but_first - all_but_last
    } else {
        0.0
    };

    if total_miles > 0.0 {
        Some(total_cost / total_miles)
    } else {
        None
    }
}

/// Intervalo típico en millas para cada tipo de servicio conocido
pub fn get_service_interval(service_type: &str) -> Option<f64> {
    match service_type.to_lowercase().as_str() {
        "oil_change" => Some(3000.0),
        "tire_rotation" => Some(6000.0),
        "brake_service" => Some(25000.0),
        "inspection" => Some(12000.0),
        "transmission" => Some(30000.0),
        "cooling_system" => Some(24000.0),
        "battery" => Some(40000.0),
        _ => None,
    }
}

/// Kilometraje en el que toca el próximo servicio de este tipo
pub fn calculate_service_due(
    _current_mileage: f64,
    last_service_mileage: f64,
    service_type: &str,
) -> Option<f64> {
    get_service_interval(service_type).map(|interval| last_service_mileage + interval)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Servicio de estadísticas respaldado por los repositorios
pub struct StatsService {
    vehicle_repository: VehicleRepository,
    fillup_repository: FillupRepository,
    maintenance_repository: MaintenanceRepository,
}

impl StatsService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            vehicle_repository: VehicleRepository::new(pool.clone()),
            fillup_repository: FillupRepository::new(pool.clone()),
            maintenance_repository: MaintenanceRepository::new(pool),
        }
    }

    /// Snapshot de estadísticas de un vehículo
    pub async fn vehicle_stats(&self, vehicle_id: Uuid) -> Result<VehicleStats, AppError> {
        let vehicle = self
            .vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let fillups = self
            .fillup_repository
            .find_by_vehicle_by_mileage(vehicle_id)
            .await?;

        let total_fillups = fillups.len() as i64;
        let total_fuel_cost = round2(fillups.iter().map(|f| f.total_cost).sum());
        let average_mpg = calculate_mpg(&fillups).map(round1);
        // Ordenados ascendente por mileage: el último es el de mayor kilometraje
        let last_fillup_mileage = fillups.last().map(|f| f.mileage);

        let last_service_mileage = self
            .maintenance_repository
            .latest_by_date(vehicle_id)
            .await?
            .map(|record| record.mileage);

        // El umbral es el kilometraje conocido más reciente del vehículo
        let threshold =
            last_fillup_mileage.map_or(vehicle.current_mileage, |m| m.max(vehicle.current_mileage));
        let next_service_due = self
            .maintenance_repository
            .next_service_after(vehicle_id, threshold)
            .await?;

        Ok(VehicleStats {
            vehicle_id,
            vehicle_name: vehicle.name,
            total_mileage: vehicle.current_mileage,
            total_fillups,
            total_fuel_cost,
            average_mpg,
            last_fillup_mileage,
            last_service_mileage,
            next_service_due,
        })
    }

    /// Estadísticas globales del dashboard.
    ///
    /// total_fuel_cost suma TODOS los fillups del store mientras que
    /// total_mileage y average_mpg solo consideran vehículos activos.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let vehicles = self.vehicle_repository.find_active().await?;

        let total_vehicles = vehicles.len() as i64;
        let total_mileage = round1(vehicles.iter().map(|v| v.current_mileage).sum());
        let total_fuel_cost = round2(self.fillup_repository.total_cost_all().await?);

        let cutoff = Utc::now() - Duration::days(30);
        let recent_fillups = self.fillup_repository.count_since(cutoff).await?;

        // Media de medias: un MPG por vehículo activo, sin ponderar por
        // cantidad de fillups
        let mut vehicle_mpgs = Vec::new();
        for vehicle in &vehicles {
            let fillups = self
                .fillup_repository
                .find_by_vehicle_by_mileage(vehicle.id)
                .await?;
            if let Some(mpg) = calculate_mpg(&fillups) {
                vehicle_mpgs.push(mpg);
            }
        }
        let average_mpg = if vehicle_mpgs.is_empty() {
            None
        } else {
            Some(round1(
                vehicle_mpgs.iter().sum::<f64>() / vehicle_mpgs.len() as f64,
            ))
        };

        let mut upcoming_services = 0;
        for vehicle in &vehicles {
            let has_upcoming = self
                .maintenance_repository
                .has_upcoming_service(vehicle.id, vehicle.current_mileage + UPCOMING_SERVICE_MARGIN)
                .await?;
            if has_upcoming {
                upcoming_services += 1;
            }
        }

        Ok(DashboardStats {
            total_vehicles,
            total_mileage,
            total_fuel_cost,
            average_mpg,
            recent_fillups,
            upcoming_services,
        })
    }
}
