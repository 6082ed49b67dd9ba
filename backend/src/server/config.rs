//! HTTP server configuration object.

use std::net::SocketAddr;

use clinic_backend::outbound::persistence::DbPool;
use clinic_backend::settings::AppSettings;

/// Everything `create_server` needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// Combine validated settings with an already built pool.
    #[must_use]
    pub fn from_settings(settings: &AppSettings, db_pool: DbPool) -> Self {
        Self::new(settings.bind_addr, db_pool)
    }
}
