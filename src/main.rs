use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use mileage_tracker::config::environment::EnvironmentConfig;
use mileage_tracker::database::connection::{create_pool, init_schema};
use mileage_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Mileage Tracker - API de kilometraje y combustible");
    info!("=====================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    init_schema(&pool).await?;
    info!("✅ Base de datos lista");

    let addr = config.server_url();
    let app_state = AppState::new(pool, config);
    let app = mileage_tracker::build_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Endpoints - Vehicles:");
    info!("   POST /api/vehicles - Crear vehículo");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("   GET  /api/vehicles/:id/stats - Estadísticas del vehículo");
    info!("   GET  /api/vehicles/:id/fillups - Fillups del vehículo");
    info!("   GET  /api/vehicles/:id/maintenance - Mantenimientos del vehículo");
    info!("   GET  /api/vehicles/:id/trips - Viajes del vehículo");
    info!("⛽ Endpoints - Fillups:");
    info!("   POST /api/fillups - Registrar fillup");
    info!("   GET  /api/fillups - Listar fillups");
    info!("   PUT  /api/fillups/:id - Actualizar fillup");
    info!("   DELETE /api/fillups/:id - Eliminar fillup");
    info!("🔧 Endpoints - Maintenance:");
    info!("   POST /api/maintenance - Registrar mantenimiento");
    info!("   GET  /api/maintenance - Listar mantenimientos");
    info!("   PUT  /api/maintenance/:id - Actualizar mantenimiento");
    info!("   DELETE /api/maintenance/:id - Eliminar mantenimiento");
    info!("🧭 Endpoints - Trips:");
    info!("   POST /api/trips - Iniciar viaje");
    info!("   GET  /api/trips - Listar viajes");
    info!("   GET  /api/trips/:id - Obtener viaje");
    info!("   PUT  /api/trips/:id - Actualizar viaje");
    info!("   POST /api/trips/:id/complete - Completar viaje");
    info!("   DELETE /api/trips/:id - Eliminar viaje");
    info!("📊 Endpoints - Dashboard:");
    info!("   GET  /api/dashboard/stats - Estadísticas globales");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
