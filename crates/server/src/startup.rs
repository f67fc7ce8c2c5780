use std::net::SocketAddr;
use std::sync::Arc;

use common::env::ensure_upload_dir;
use configs::AppConfig;
use migration::MigratorTrait;
use service::auth::token::TokenConfig;
use service::media::LocalMediaStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Load configuration and serve until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    run_with_config(cfg).await
}

pub async fn run_with_config(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg).await?;
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    info!(%addr, "listening");
    serve(listener, state, shutdown_signal()).await
}

/// Connect, migrate, prepare the upload directory and seed the admin account.
pub async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;

    ensure_upload_dir(&cfg.media.upload_dir).await?;
    let media = Arc::new(LocalMediaStore::new(&cfg.media.upload_dir, &cfg.media.public_base_url));
    let tokens = TokenConfig { jwt_secret: cfg.auth.jwt_secret.clone(), ttl_hours: cfg.auth.token_ttl_hours };
    let state = AppState::new(db, tokens, media, &cfg.media.upload_dir);

    if let (Some(email), Some(password)) = (&cfg.auth.admin_email, &cfg.auth.admin_password) {
        match state.auth.bootstrap_admin(email, password).await {
            Ok(Some(id)) => info!(account_id = %id, "admin_bootstrapped"),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "admin bootstrap skipped"),
        }
    }
    Ok(state)
}

/// Serve `state` on an already bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<(), StartupError> {
    let app = routes::build_router(state, CorsLayer::very_permissive());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(anyhow::Error::from)?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "ctrl-c handler unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
