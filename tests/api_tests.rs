//! Tests de integración contra el router completo, usando una base
//! SQLite en memoria por test.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use mileage_tracker::config::environment::EnvironmentConfig;
use mileage_tracker::database::connection::{create_pool, init_schema};
use mileage_tracker::state::AppState;

async fn test_app() -> Router {
    let pool = create_pool(Some("sqlite::memory:")).await.unwrap();
    init_schema(&pool).await.unwrap();
    mileage_tracker::build_router(AppState::new(pool, EnvironmentConfig::default()))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Crear un vehículo con defaults razonables y devolver su representación
async fn create_vehicle(app: &Router, name: &str, extra: Value) -> Value {
    let mut payload = json!({
        "name": name,
        "make": "Toyota",
        "model": "Corolla",
        "year": 2020,
    });
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }

    let (status, body) = request(app, "POST", "/api/vehicles", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    body["data"].clone()
}

async fn create_fillup(
    app: &Router,
    vehicle_id: &str,
    mileage: f64,
    gallons: f64,
) -> (StatusCode, Value) {
    request(
        app,
        "POST",
        "/api/fillups",
        Some(json!({
            "vehicle_id": vehicle_id,
            "mileage": mileage,
            "gallons": gallons,
            "price_per_gallon": 3.50,
            "total_cost": gallons * 3.50,
            "is_full_tank": true,
        })),
    )
    .await
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_vehicle_applies_defaults() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Mi Corolla", json!({})).await;

    assert_eq!(vehicle["fuel_type"], "gasoline");
    assert_eq!(vehicle["current_mileage"], 0.0);
    assert_eq!(vehicle["is_active"], true);

    let id = vehicle["id"].as_str().unwrap();
    let (status, fetched) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Mi Corolla");
    assert_eq!(fetched["make"], "Toyota");
}

#[tokio::test]
async fn test_duplicate_vehicle_name_is_conflict() {
    let app = test_app().await;
    create_vehicle(&app, "Repetido", json!({})).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/vehicles",
        Some(json!({
            "name": "Repetido",
            "make": "Honda",
            "model": "Civic",
            "year": 2019,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Conflict");
}

#[tokio::test]
async fn test_get_missing_vehicle_is_not_found() {
    let app = test_app().await;
    let (status, _) = request(
        &app,
        "GET",
        "/api/vehicles/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_fuel_type_is_rejected() {
    let app = test_app().await;
    let (status, _) = request(
        &app,
        "POST",
        "/api/vehicles",
        Some(json!({
            "name": "Nave",
            "make": "SpaceX",
            "model": "Falcon",
            "year": 2024,
            "fuel_type": "plutonium",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_vehicle_preserves_omitted_fields() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Original", json!({"notes": "nota vieja"})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/vehicles/{}", id),
        Some(json!({"notes": "nota nueva"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Original");
    assert_eq!(body["data"]["make"], "Toyota");
    assert_eq!(body["data"]["notes"], "nota nueva");
    assert!(body["data"]["updated_at"].is_string());
}

#[tokio::test]
async fn test_rename_vehicle_to_existing_name_is_conflict() {
    let app = test_app().await;
    create_vehicle(&app, "Primero", json!({})).await;
    let second = create_vehicle(&app, "Segundo", json!({})).await;
    let id = second["id"].as_str().unwrap();

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/vehicles/{}", id),
        Some(json!({"name": "Primero"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_vehicles_envelope() {
    let app = test_app().await;
    create_vehicle(&app, "Uno", json!({})).await;
    create_vehicle(&app, "Dos", json!({})).await;

    let (status, body) = request(&app, "GET", "/api/vehicles", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["vehicles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_fillup_advances_vehicle_mileage() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Ratchet", json!({"current_mileage": 100.0})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, _) = create_fillup(&app, id, 150.0, 10.0).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(fetched["current_mileage"], 150.0);
}

#[tokio::test]
async fn test_fillup_below_current_mileage_is_rejected() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Ratchet", json!({"current_mileage": 100.0})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, body) = create_fillup(&app, id, 50.0, 10.0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");

    // El kilometraje del vehículo no se movió
    let (_, fetched) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(fetched["current_mileage"], 100.0);
}

#[tokio::test]
async fn test_fillup_equal_to_current_mileage_is_accepted() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Ratchet", json!({"current_mileage": 100.0})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, _) = create_fillup(&app, id, 100.0, 10.0).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_fillup_backdated_allowed_on_fresh_vehicle() {
    // Con current_mileage en cero todavía no hay historia que proteger
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Nuevo", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, _) = create_fillup(&app, id, 42000.0, 10.0).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(fetched["current_mileage"], 42000.0);
}

#[tokio::test]
async fn test_fillup_for_missing_vehicle_is_not_found() {
    let app = test_app().await;
    let (status, _) =
        create_fillup(&app, "00000000-0000-0000-0000-000000000000", 100.0, 10.0).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_fillups_scoped_listing() {
    let app = test_app().await;
    let first = create_vehicle(&app, "Primero", json!({})).await;
    let second = create_vehicle(&app, "Segundo", json!({})).await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    create_fillup(&app, first_id, 100.0, 10.0).await;
    create_fillup(&app, first_id, 400.0, 10.0).await;
    create_fillup(&app, second_id, 50.0, 5.0).await;

    let (status, body) = request(
        &app,
        "GET",
        &format!("/api/vehicles/{}/fillups", first_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);

    let (status, _) = request(
        &app,
        "GET",
        "/api/vehicles/00000000-0000-0000-0000-000000000000/fillups",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_global_fillup_listing_includes_vehicle_name() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "ConNombre", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();
    create_fillup(&app, id, 100.0, 10.0).await;

    let (status, body) = request(&app, "GET", "/api/fillups", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["fillups"][0]["vehicle_name"], "ConNombre");
}

#[tokio::test]
async fn test_fillup_update_does_not_move_vehicle_mileage() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Editable", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (_, created) = create_fillup(&app, id, 100.0, 10.0).await;
    let fillup_id = created["data"]["id"].as_str().unwrap();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/fillups/{}", fillup_id),
        Some(json!({"mileage": 500.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mileage"], 500.0);

    // La edición no re-ejecuta el ratchet del vehículo
    let (_, fetched) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(fetched["current_mileage"], 100.0);
}

#[tokio::test]
async fn test_maintenance_crud() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Taller", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, body) = request(
        &app,
        "POST",
        "/api/maintenance",
        Some(json!({
            "vehicle_id": id,
            "mileage": 30000.0,
            "service_type": "oil_change",
            "description": "Cambio de aceite sintético",
            "cost": 65.0,
            "next_service_mileage": 33000.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let record_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/maintenance/{}", record_id),
        Some(json!({"cost": 70.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cost"], 70.0);
    assert_eq!(body["data"]["service_type"], "oil_change");

    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/api/maintenance/{}", record_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/maintenance/{}", record_id),
        Some(json!({"cost": 80.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trip_lifecycle() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Viajero", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, body) = request(
        &app,
        "POST",
        "/api/trips",
        Some(json!({
            "vehicle_id": id,
            "start_mileage": 100.0,
            "purpose": "business",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let trip = &body["data"];
    assert!(trip["end_date"].is_null());
    assert!(trip["distance"].is_null());
    let trip_id = trip["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/trips/{}/complete", trip_id),
        Some(json!({"end_mileage": 350.0, "end_location": "Oficina"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 250.0);
    assert_eq!(body["data"]["end_mileage"], 350.0);
    assert_eq!(body["data"]["end_location"], "Oficina");
    assert!(body["data"]["end_date"].is_string());
}

#[tokio::test]
async fn test_trip_create_backfills_distance() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Histórico", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    // Un viaje histórico con ambas lecturas: la distancia del payload se ignora
    let (status, body) = request(
        &app,
        "POST",
        "/api/trips",
        Some(json!({
            "vehicle_id": id,
            "start_mileage": 1000.0,
            "end_mileage": 1080.0,
            "distance": 9999.0,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 80.0);
}

#[tokio::test]
async fn test_trip_complete_recomputes_stale_distance() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Recalculo", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (_, body) = request(
        &app,
        "POST",
        "/api/trips",
        Some(json!({
            "vehicle_id": id,
            "start_mileage": 500.0,
            "distance": 12345.0,
        })),
    )
    .await;
    let trip_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        "POST",
        &format!("/api/trips/{}/complete", trip_id),
        Some(json!({"end_mileage": 620.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 120.0);
}

#[tokio::test]
async fn test_trip_partial_update_recomputes_distance() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Parcial", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (_, body) = request(
        &app,
        "POST",
        "/api/trips",
        Some(json!({
            "vehicle_id": id,
            "start_mileage": 100.0,
            "end_mileage": 200.0,
        })),
    )
    .await;
    let trip_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["distance"], 100.0);

    // Cambiar solo end_mileage recalcula con el start almacenado
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/trips/{}", trip_id),
        Some(json!({"end_mileage": 260.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 160.0);

    // Un update sin kilometrajes no toca la distancia
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/trips/{}", trip_id),
        Some(json!({"notes": "sin cambios de lectura"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["distance"], 160.0);
}

#[tokio::test]
async fn test_delete_vehicle_cascades_children() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Cascada", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (_, fillup) = create_fillup(&app, id, 100.0, 10.0).await;
    let fillup_id = fillup["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = request(&app, "DELETE", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = request(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // El fillup cayó junto con el vehículo
    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/fillups/{}", fillup_id),
        Some(json!({"mileage": 150.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_vehicle_stats_endpoint() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Estadístico", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    // 300 millas con los 10 galones del primer fillup -> 30.0 MPG
    create_fillup(&app, id, 1000.0, 10.0).await;
    create_fillup(&app, id, 1300.0, 10.0).await;

    let (status, stats) =
        request(&app, "GET", &format!("/api/vehicles/{}/stats", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["vehicle_name"], "Estadístico");
    assert_eq!(stats["total_fillups"], 2);
    assert_eq!(stats["total_fuel_cost"], 70.0);
    assert_eq!(stats["average_mpg"], 30.0);
    assert_eq!(stats["last_fillup_mileage"], 1300.0);
    assert_eq!(stats["total_mileage"], 1300.0);
    assert!(stats["last_service_mileage"].is_null());
    assert!(stats["next_service_due"].is_null());
}

#[tokio::test]
async fn test_vehicle_stats_with_insufficient_data() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "SinDatos", json!({})).await;
    let id = vehicle["id"].as_str().unwrap();

    let (status, stats) =
        request(&app, "GET", &format!("/api/vehicles/{}/stats", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_fillups"], 0);
    assert_eq!(stats["total_fuel_cost"], 0.0);
    assert!(stats["average_mpg"].is_null());
    assert!(stats["last_fillup_mileage"].is_null());
}

#[tokio::test]
async fn test_vehicle_stats_next_service_due() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Servicio", json!({"current_mileage": 30000.0})).await;
    let id = vehicle["id"].as_str().unwrap();

    // Un servicio ya vencido y uno por delante: solo el futuro cuenta
    request(
        &app,
        "POST",
        "/api/maintenance",
        Some(json!({
            "vehicle_id": id,
            "mileage": 27000.0,
            "service_type": "oil_change",
            "description": "Aceite",
            "next_service_mileage": 30000.0,
        })),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/maintenance",
        Some(json!({
            "vehicle_id": id,
            "mileage": 28000.0,
            "service_type": "tire_rotation",
            "description": "Rotación",
            "next_service_mileage": 34000.0,
        })),
    )
    .await;

    let (status, stats) =
        request(&app, "GET", &format!("/api/vehicles/{}/stats", id), None).await;
    assert_eq!(status, StatusCode::OK);
    // next_service_mileage de 30000 no supera el umbral (estricto)
    assert_eq!(stats["next_service_due"], 34000.0);
    // El último servicio por fecha es la rotación
    assert_eq!(stats["last_service_mileage"], 28000.0);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = test_app().await;
    let first = create_vehicle(&app, "Activo", json!({})).await;
    let second = create_vehicle(&app, "Eficiente", json!({})).await;
    let first_id = first["id"].as_str().unwrap();
    let second_id = second["id"].as_str().unwrap();

    // Vehículo 1: 200 mi / 10 gal = 20 MPG; vehículo 2: 400 mi / 10 gal = 40 MPG
    create_fillup(&app, first_id, 1000.0, 10.0).await;
    create_fillup(&app, first_id, 1200.0, 5.0).await;
    create_fillup(&app, second_id, 2000.0, 10.0).await;
    create_fillup(&app, second_id, 2400.0, 5.0).await;

    let (status, stats) = request(&app, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_vehicles"], 2);
    // Media de medias, no ponderada: (20 + 40) / 2
    assert_eq!(stats["average_mpg"], 30.0);
    assert_eq!(stats["total_mileage"], 3600.0);
    assert_eq!(stats["recent_fillups"], 4);
    assert_eq!(stats["upcoming_services"], 0);
}

#[tokio::test]
async fn test_dashboard_excludes_inactive_vehicles_from_mileage() {
    let app = test_app().await;
    create_vehicle(&app, "Activo", json!({"current_mileage": 1000.0})).await;
    let inactive = create_vehicle(
        &app,
        "Jubilado",
        json!({"current_mileage": 90000.0, "is_active": false}),
    )
    .await;
    let inactive_id = inactive["id"].as_str().unwrap();

    let (_, fillup) = create_fillup(&app, inactive_id, 90001.0, 10.0).await;
    assert!(fillup["success"].as_bool().unwrap());

    let (status, stats) = request(&app, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_vehicles"], 1);
    assert_eq!(stats["total_mileage"], 1000.0);
    // El costo global sí suma los fillups del vehículo inactivo
    assert_eq!(stats["total_fuel_cost"], 35.0);
    // Y el conteo reciente también incluye todo el store
    assert_eq!(stats["recent_fillups"], 1);
}

#[tokio::test]
async fn test_dashboard_counts_upcoming_services_once_per_vehicle() {
    let app = test_app().await;
    let vehicle = create_vehicle(&app, "Pendiente", json!({"current_mileage": 30000.0})).await;
    let id = vehicle["id"].as_str().unwrap();

    // Dos servicios dentro del margen de 1000 millas: el vehículo cuenta una vez
    for (service, due) in [("oil_change", 30500.0), ("tire_rotation", 30900.0)] {
        request(
            &app,
            "POST",
            "/api/maintenance",
            Some(json!({
                "vehicle_id": id,
                "mileage": 27000.0,
                "service_type": service,
                "description": "Servicio",
                "next_service_mileage": due,
            })),
        )
        .await;
    }

    let (status, stats) = request(&app, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["upcoming_services"], 1);
}
