use std::sync::Arc;

use axum::extract::FromRef;
use apicinema_db::Datastore;

use crate::config::ServerConfig;
use crate::services::{CinemaService, EntityService, FilmService, SalleService, SeanceService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers usually extract just the service they need; see the [`FromRef`]
/// impls below.
#[derive(Clone)]
pub struct AppState {
    /// Backing datastore (Postgres pool or in-memory tables).
    pub store: Datastore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub cinemas: CinemaService,
    pub salles: SalleService,
    pub seances: SeanceService,
    pub films: FilmService,
}

impl AppState {
    /// Wire one service per entity onto the repositories of `store`.
    pub fn new(store: Datastore, config: ServerConfig) -> Self {
        Self {
            cinemas: EntityService::new(store.cinemas()),
            salles: EntityService::new(store.salles()),
            seances: EntityService::new(store.seances()),
            films: EntityService::new(store.films()),
            config: Arc::new(config),
            store,
        }
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.config)
    }
}

impl FromRef<AppState> for CinemaService {
    fn from_ref(state: &AppState) -> Self {
        state.cinemas.clone()
    }
}

impl FromRef<AppState> for SalleService {
    fn from_ref(state: &AppState) -> Self {
        state.salles.clone()
    }
}

impl FromRef<AppState> for SeanceService {
    fn from_ref(state: &AppState) -> Self {
        state.seances.clone()
    }
}

impl FromRef<AppState> for FilmService {
    fn from_ref(state: &AppState) -> Self {
        state.films.clone()
    }
}
