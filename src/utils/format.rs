//! Utilidades de presentación
//!
//! Formateo de moneda, kilometraje y fechas, iconos por tipo de
//! combustible/servicio/viaje y derivaciones simples (edad del vehículo,
//! millas por año, categoría de servicio).

use chrono::{DateTime, Utc};

/// Formatear un monto como moneda
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Formatear kilometraje con separador de miles y un decimal
pub fn format_mileage(mileage: f64) -> String {
    let formatted = format!("{:.1}", mileage.abs());
    let (int_part, dec_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "0"));

    let mut grouped = String::new();
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if mileage < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, dec_part)
}

/// Icono para el tipo de combustible
pub fn fuel_type_icon(fuel_type: &str) -> &'static str {
    match fuel_type.to_lowercase().as_str() {
        "diesel" => "🛢️",
        "electric" => "⚡",
        "hybrid" => "🔋",
        _ => "⛽",
    }
}

/// Icono para el tipo de servicio
pub fn service_type_icon(service_type: &str) -> &'static str {
    match service_type.to_lowercase().as_str() {
        "oil_change" => "🛢️",
        "tire_rotation" => "🛞",
        "brake_service" => "🛑",
        "transmission" => "⚙️",
        "cooling_system" => "❄️",
        "battery" => "🔋",
        "inspection" => "🔍",
        _ => "🔧",
    }
}

/// Icono para el propósito del viaje
pub fn trip_purpose_icon(purpose: &str) -> &'static str {
    match purpose.to_lowercase().as_str() {
        "business" => "💼",
        "personal" => "🏠",
        "commute" => "🚗",
        "vacation" => "🏖️",
        "errand" => "🛒",
        _ => "📍",
    }
}

/// Formatear fecha para mostrar (ej. "Jan 15, 2024")
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Formatear fecha y hora para mostrar (ej. "Jan 15, 2024 02:30 PM")
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y %I:%M %p").to_string()
}

/// Edad del vehículo en años desde la fecha de compra
pub fn vehicle_age_years(purchase_date: Option<DateTime<Utc>>) -> Option<f64> {
    purchase_date.map(|date| (Utc::now() - date).num_days() as f64 / 365.25)
}

/// Promedio de millas recorridas por año
pub fn mileage_per_year(current_mileage: f64, purchase_date: Option<DateTime<Utc>>) -> Option<f64> {
    match vehicle_age_years(purchase_date) {
        Some(age) if age > 0.0 => Some(current_mileage / age),
        _ => None,
    }
}

/// Agrupar tipos de servicio en categorías para organización
pub fn categorize_service_type(service_type: &str) -> &'static str {
    match service_type {
        "oil_change" | "filter_change" | "fluid_check" => "maintenance",
        "tire_rotation" | "tire_replacement" | "tire_repair" => "tires",
        "brake_service" | "brake_pad_replacement" => "brakes",
        "transmission" | "cooling_system" | "battery" | "spark_plugs" => "engine",
        "inspection" | "emissions_test" => "inspection",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(45.678), "$45.68");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_mileage() {
        assert_eq!(format_mileage(1234567.89), "1,234,567.9");
        assert_eq!(format_mileage(999.0), "999.0");
        assert_eq!(format_mileage(1000.0), "1,000.0");
        assert_eq!(format_mileage(0.0), "0.0");
    }

    #[test]
    fn test_fuel_type_icon() {
        assert_eq!(fuel_type_icon("electric"), "⚡");
        assert_eq!(fuel_type_icon("GASOLINE"), "⛽");
        assert_eq!(fuel_type_icon("unknown"), "⛽");
    }

    #[test]
    fn test_service_type_icon() {
        assert_eq!(service_type_icon("oil_change"), "🛢️");
        assert_eq!(service_type_icon("something_else"), "🔧");
    }

    #[test]
    fn test_trip_purpose_icon() {
        assert_eq!(trip_purpose_icon("Business"), "💼");
        assert_eq!(trip_purpose_icon("roadtrip"), "📍");
    }

    #[test]
    fn test_format_date() {
        let date = DateTime::parse_from_rfc3339("2024-01-15T14:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&date), "Jan 15, 2024");
        assert_eq!(format_datetime(&date), "Jan 15, 2024 02:30 PM");
    }

    #[test]
    fn test_vehicle_age_years() {
        assert_eq!(vehicle_age_years(None), None);
        let two_years_ago = Utc::now() - Duration::days(731);
        let age = vehicle_age_years(Some(two_years_ago)).unwrap();
        assert!((age - 2.0).abs() < 0.1);
    }

    #[test]
    fn test_mileage_per_year() {
        assert_eq!(mileage_per_year(10000.0, None), None);
        let two_years_ago = Utc::now() - Duration::days(731);
        let per_year = mileage_per_year(20000.0, Some(two_years_ago)).unwrap();
        assert!((per_year - 10000.0).abs() < 500.0);
    }

    #[test]
    fn test_categorize_service_type() {
        assert_eq!(categorize_service_type("oil_change"), "maintenance");
        assert_eq!(categorize_service_type("tire_rotation"), "tires");
        assert_eq!(categorize_service_type("brake_service"), "brakes");
        assert_eq!(categorize_service_type("battery"), "engine");
        assert_eq!(categorize_service_type("emissions_test"), "inspection");
        assert_eq!(categorize_service_type("car_wash"), "other");
    }
}
