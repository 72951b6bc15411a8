use std::sync::Arc;

use filmlib_db::DbPool;

use crate::config::ServerConfig;
use crate::services::{ActorService, AuthService, FilmService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// No request-specific data lives here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub auth: AuthService,
    pub actors: ActorService,
    pub films: FilmService,
}

impl AppState {
    /// Build the services around `pool`, taking ownership of `config`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            auth: AuthService::new(pool.clone(), config.jwt.clone()),
            actors: ActorService::new(pool.clone()),
            films: FilmService::new(pool.clone()),
            config: Arc::new(config),
            pool,
        }
    }
}
