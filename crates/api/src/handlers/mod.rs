//! Handlers shared by the `/cinemas`, `/salles`, `/seances` and `/films`
//! resources.
//!
//! Each handler is generic over the entity and pulls its service out of the
//! application state, so one set of functions serves all four resources.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use apicinema_db::models::Entity;

use crate::config::ServerConfig;
use crate::error::AppResult;
use crate::services::EntityService;

/// GET /{resource}
pub async fn list<E: Entity>(
    State(service): State<EntityService<E>>,
) -> AppResult<Json<Vec<E::Dto>>> {
    let items = service.find_all().await?;
    Ok(Json(items))
}

/// GET /{resource}/{id}
pub async fn get_by_id<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<Json<E::Dto>> {
    let item = service.find_by_id(&id).await?;
    Ok(Json(item))
}

/// POST /{resource}
pub async fn create<E: Entity>(
    State(service): State<EntityService<E>>,
    payload: Result<Json<E::Dto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<E::Dto>)> {
    let Json(input) = payload?;
    let saved = service.save(input).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /{resource}
///
/// Full replacement keyed by the body's `id`. Answers `200`, or `201` when
/// `PUT_RETURNS_CREATED` is set.
pub async fn update<E: Entity>(
    State(service): State<EntityService<E>>,
    State(config): State<Arc<ServerConfig>>,
    payload: Result<Json<E::Dto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<E::Dto>)> {
    let Json(input) = payload?;
    let saved = service.save(input).await?;
    let status = if config.put_returns_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(saved)))
}

/// Body of the legacy `DELETE /{resource}`. Clients send the whole object;
/// every field other than `id` is ignored.
#[derive(Debug, Deserialize)]
pub struct IdBody {
    pub id: String,
}

/// DELETE /{resource} with the object as body.
pub async fn delete_by_body<E: Entity>(
    State(service): State<EntityService<E>>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> AppResult<Json<bool>> {
    let Json(body) = payload?;
    service.delete(&body.id).await?;
    Ok(Json(true))
}

/// DELETE /{resource}/{id}
pub async fn delete_by_id<E: Entity>(
    State(service): State<EntityService<E>>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    service.delete(&id).await?;
    Ok(Json(true))
}
