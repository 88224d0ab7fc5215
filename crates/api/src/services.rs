//! Entity services.
//!
//! One generic [`EntityService`] backs every resource: it maps DTOs to
//! entities and back around a [`Repository`], and turns a lookup miss into
//! [`CoreError::NotFound`]. Store failures are passed through untouched.

use std::sync::Arc;

use apicinema_core::error::CoreError;
use apicinema_core::types::{is_assigned, new_entity_id};
use apicinema_db::models::{Cinema, Entity, Film, Salle, Seance};
use apicinema_db::repositories::Repository;

use crate::error::AppResult;

pub type CinemaService = EntityService<Cinema>;
pub type SalleService = EntityService<Salle>;
pub type SeanceService = EntityService<Seance>;
pub type FilmService = EntityService<Film>;

/// CRUD orchestration for one entity type.
///
/// The repository is injected at construction; cloning shares it.
pub struct EntityService<E: Entity> {
    repo: Arc<dyn Repository<E>>,
}

impl<E: Entity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> EntityService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        Self { repo }
    }

    /// Every stored entity as a DTO; empty when nothing is stored.
    pub async fn find_all(&self) -> AppResult<Vec<E::Dto>> {
        let entities = self.repo.find_all().await?;
        Ok(entities.into_iter().map(E::Dto::from).collect())
    }

    /// The entity with `id`, or [`CoreError::NotFound`].
    pub async fn find_by_id(&self, id: &str) -> AppResult<E::Dto> {
        let entity = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(E::NAME, id))?;
        Ok(entity.into())
    }

    /// Insert or replace, keyed by the DTO's id. A blank id gets a fresh one.
    ///
    /// Returns the entity as stored, which is what a later read will return.
    pub async fn save(&self, dto: E::Dto) -> AppResult<E::Dto> {
        let mut entity: E = dto.into();
        if !is_assigned(entity.id()) {
            entity.set_id(new_entity_id());
        }

        let saved = self.repo.save(&entity).await?;
        tracing::debug!(entity = E::NAME, id = %saved.id(), "Saved");
        Ok(saved.into())
    }

    /// Remove the entity with `id`. Removing an absent id is a no-op.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        tracing::debug!(entity = E::NAME, id, removed, "Deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use apicinema_db::models::CinemaDto;
    use apicinema_db::repositories::MemoryStore;

    use super::*;
    use crate::error::AppError;

    fn service() -> CinemaService {
        CinemaService::new(Arc::new(MemoryStore::new()))
    }

    fn luxor() -> CinemaDto {
        CinemaDto {
            id: "11111111111".into(),
            name: "Luxor".into(),
        }
    }

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        assert!(service().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_dto_reads_back_equal() {
        let service = service();
        let saved = service.save(luxor()).await.unwrap();
        assert_eq!(saved, luxor());
        assert_eq!(service.find_by_id("11111111111").await.unwrap(), luxor());
    }

    #[tokio::test]
    async fn saving_twice_is_idempotent() {
        let service = service();
        let first = service.save(luxor()).await.unwrap();
        let second = service.save(luxor()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(service.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_is_observable() {
        let service = service();
        let old = service.save(luxor()).await.unwrap();
        let new = service
            .save(CinemaDto {
                name: "Pathé".into(),
                ..luxor()
            })
            .await
            .unwrap();

        assert_eq!(new.name, "Pathé");
        assert_ne!(old, new);
        assert_eq!(service.find_by_id(&old.id).await.unwrap(), new);
    }

    #[tokio::test]
    async fn blank_id_is_assigned() {
        let service = service();
        let saved = service
            .save(CinemaDto {
                id: String::new(),
                name: "Rex".into(),
            })
            .await
            .unwrap();

        assert!(!saved.id.is_empty());
        assert_eq!(service.find_by_id(&saved.id).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let err = service().find_by_id("146546376").await.unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::NotFound { entity: "Cinema", ref id }) if id == "146546376"
        );
    }

    #[tokio::test]
    async fn delete_then_find_is_not_found() {
        let service = service();
        service.save(luxor()).await.unwrap();
        service.delete("11111111111").await.unwrap();
        // Second delete is a no-op.
        service.delete("11111111111").await.unwrap();

        assert_matches!(
            service.find_by_id("11111111111").await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }
}
