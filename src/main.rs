use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use taxi_dispatch::config::database::DatabaseConfig;
use taxi_dispatch::config::environment::EnvironmentConfig;
use taxi_dispatch::database::{connection::mask_database_url, schema, DatabaseConnection};
use taxi_dispatch::middleware::cors::cors_middleware;
use taxi_dispatch::routes;
use taxi_dispatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenvy::dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚕 Taxi Dispatch - Backend de despacho de viajes");
    info!("================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    info!("🗄️ Base de datos: {}", mask_database_url(&db_config.url));

    let db_connection = match DatabaseConnection::new(db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    schema::init_schema(&pool).await?;

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .merge(routes::driver_routes::create_auth_router())
        .nest(
            "/api",
            Router::new()
                .merge(routes::driver_routes::create_driver_router())
                .merge(routes::trip_routes::create_trip_router())
                .merge(routes::bill_routes::create_bill_router()),
        )
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🧑‍✈️ Drivers:");
    info!("   POST /api/drivers/register - Registrar conductor");
    info!("   POST /api/drivers/check-exists - Verificar campos únicos");
    info!("   POST /login - Login de conductor");
    info!("   GET  /api/drivers - Listado resumido");
    info!("   GET  /api/all-drivers - Listado completo");
    info!("   GET  /api/drivers/:id - Obtener conductor");
    info!("   PUT  /api/drivers/:id - Actualizar perfil");
    info!("   GET  /api/drivers/status/:email - Estado del conductor");
    info!("   PUT  /api/driver/:id/status - Cambiar estado");
    info!("   GET/PUT /api/driver/:id/location - Ubicación actual");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("🚗 Trips:");
    info!("   POST /api/trips - Crear viaje");
    info!("   GET  /api/trips - Listar viajes");
    info!("   GET  /api/trips/:id - Obtener viaje");
    info!("   PUT  /api/trips/:id/accept - Aceptar viaje (bidding)");
    info!("   PUT  /api/trips/assign-driver - Asignar driver");
    info!("   PUT  /api/trips/:id/start - Iniciar viaje");
    info!("   PUT  /api/trips/:id/complete - Completar viaje");
    info!("   PUT  /api/trips/update-field - Actualizar campo whitelisteado");
    info!("   GET  /api/trips/active/:email - Viajes activos del driver");
    info!("   DELETE /api/trips/:id - Eliminar viaje");
    info!("💰 Bills:");
    info!("   POST /api/bills - Guardar factura");
    info!("   GET  /api/bills/:driverEmail - Facturas del driver");
    info!("   GET  /api/all-bills - Todas las facturas");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

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
