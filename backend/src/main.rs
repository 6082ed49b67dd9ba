//! Clinic backend entry point: reads settings, builds the pool and serves.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use clinic_backend::inbound::http::health::HealthState;
use clinic_backend::outbound::persistence::DbPool;
use clinic_backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env(&DefaultEnv::new()).map_err(|err| {
        error!(error = %err, "invalid configuration");
        std::io::Error::other(err.to_string())
    })?;

    let db_pool = DbPool::new(settings.pool_config()).await.map_err(|err| {
        error!(error = %err, "database pool unavailable");
        std::io::Error::other(err.to_string())
    })?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::from_settings(&settings, db_pool);
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
