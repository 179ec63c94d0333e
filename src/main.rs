use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use moto_api::config::environment::EnvironmentConfig;
use moto_api::middleware::cors::cors_layer;
use moto_api::routes::create_app_router;
use moto_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🏍️ Moto API - Registro de motos em memória");
    info!("===========================================");

    let addr: SocketAddr = config.server_url().parse()?;

    let app_state = AppState::new(config.clone());
    let app = create_app_router(app_state).layer(cors_layer(&config));

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET    /health - Health check");
    info!("   GET    /motos - Listar todas as motos");
    info!("   GET    /motos/:id - Buscar moto por id");
    info!("   POST   /motos - Cadastrar nova moto");
    info!("   PUT    /motos/:id - Atualizar moto");
    info!("   DELETE /motos/:id - Remover moto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Sinal de desligamento graceful
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
            info!("🛑 Sinal Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
