mod config;
mod error;
mod extract;
mod form;
mod handlers;
mod response;

pub use config::Config;
pub use error::{ApiError, ApiResult};

use anyhow::Context;
use axum::{
    routing::{delete, get},
    Router,
};
use bakery_service::sea_orm::{Database, DatabaseConnection};
use migration::{Migrator, MigratorTrait};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "bakery_api=debug,bakery_service=debug,tower_http=debug,sea_orm=info";

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/baked_goods",
            get(handlers::list_baked_goods).post(handlers::create_baked_good),
        )
        .route("/baked_goods/{id}", delete(handlers::delete_baked_good))
        .route(
            "/bakeries/{id}",
            get(handlers::get_bakery).patch(handlers::update_bakery),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let conn = Database::connect(config.database_url.as_str())
        .await
        .context("Database connection failed")?;
    Migrator::up(&conn, None)
        .await
        .context("Database migration failed")?;

    let listener = tokio::net::TcpListener::bind(config.server_url())
        .await
        .with_context(|| format!("Failed to bind {}", config.server_url()))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState { conn }))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig_term) => {
                sig_term.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("receive Ctrl C"),
        _ = terminate => tracing::info!("receive SIGTERM"),
    }
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
