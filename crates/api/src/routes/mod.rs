pub mod health;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use apicinema_db::models::{Cinema, Entity, Film, Salle, Seance};

use crate::handlers;
use crate::services::EntityService;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cinemas                 list (GET), create (POST), update (PUT), delete by body (DELETE)
/// /cinemas/{id}            get (GET), delete (DELETE)
///
/// /salles                  same shape as /cinemas
/// /salles/{id}
///
/// /seances                 same shape as /cinemas
/// /seances/{id}
///
/// /films                   same shape as /cinemas
/// /films/{id}
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cinemas", resource::<Cinema>())
        .nest("/salles", resource::<Salle>())
        .nest("/seances", resource::<Seance>())
        .nest("/films", resource::<Film>())
}

/// Routes for one entity resource.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /        -> update
/// DELETE /        -> delete_by_body
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete_by_id
/// ```
fn resource<E>() -> Router<AppState>
where
    E: Entity,
    EntityService<E>: FromRef<AppState>,
{
    Router::new()
        .route(
            "/",
            get(handlers::list::<E>)
                .post(handlers::create::<E>)
                .put(handlers::update::<E>)
                .delete(handlers::delete_by_body::<E>),
        )
        .route(
            "/{id}",
            get(handlers::get_by_id::<E>).delete(handlers::delete_by_id::<E>),
        )
}
