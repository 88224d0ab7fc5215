//! Integration tests for the Postgres repositories.
//!
//! Exercises the full repository layer against a real database:
//! - Upsert semantics (insert, then replace by id)
//! - Reference chains resolved through the LEFT JOINs
//! - Dangling references reading back as NULL
//! - Idempotent delete
//!
//! Each test gets a fresh database from `#[sqlx::test]`, which needs
//! `DATABASE_URL`; run with `cargo test -p apicinema-db -- --ignored`.

use chrono::TimeZone;
use sqlx::PgPool;
use apicinema_db::models::{Cinema, Film, Salle, Seance};
use apicinema_db::repositories::{CinemaRepo, FilmRepo, Repository, SalleRepo, SeanceRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_cinema(id: &str, name: &str) -> Cinema {
    Cinema {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn new_salle(id: &str, cinema: Option<Cinema>) -> Salle {
    Salle {
        id: id.to_string(),
        number: 4,
        capacity: 86,
        cinema,
    }
}

fn new_seance(id: &str, salle: Option<Salle>) -> Seance {
    Seance {
        id: id.to_string(),
        date: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 20, 30, 0).unwrap(),
        salle,
    }
}

// ---------------------------------------------------------------------------
// Cinema
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_cinema_upsert_and_find(pool: PgPool) {
    let repo = CinemaRepo::new(pool);

    let created = repo.save(&new_cinema("11111111111", "Luxor")).await.unwrap();
    assert_eq!(created, new_cinema("11111111111", "Luxor"));

    let updated = repo.save(&new_cinema("11111111111", "Pathé")).await.unwrap();
    assert_eq!(updated.name, "Pathé");

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![updated.clone()]);

    let found = repo.find_by_id("11111111111").await.unwrap();
    assert_eq!(found, Some(updated));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_cinema_delete_is_idempotent(pool: PgPool) {
    let repo = CinemaRepo::new(pool);
    repo.save(&new_cinema("c1", "Luxor")).await.unwrap();

    assert!(repo.delete("c1").await.unwrap());
    assert!(!repo.delete("c1").await.unwrap());
    assert!(repo.find_by_id("c1").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_find_all_on_empty_table(pool: PgPool) {
    assert!(CinemaRepo::new(pool.clone()).find_all().await.unwrap().is_empty());
    assert!(FilmRepo::new(pool).find_all().await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_salle_resolves_current_cinema(pool: PgPool) {
    let cinemas = CinemaRepo::new(pool.clone());
    let salles = SalleRepo::new(pool);

    cinemas.save(&new_cinema("c1", "Pathé")).await.unwrap();
    let saved = salles
        .save(&new_salle("s1", Some(new_cinema("c1", "stale name"))))
        .await
        .unwrap();
    assert_eq!(saved.cinema, Some(new_cinema("c1", "Pathé")));

    cinemas.save(&new_cinema("c1", "Luxor")).await.unwrap();
    let found = salles.find_by_id("s1").await.unwrap().unwrap();
    assert_eq!(found.cinema, Some(new_cinema("c1", "Luxor")));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_dangling_reference_reads_back_as_none(pool: PgPool) {
    let salles = SalleRepo::new(pool);
    let saved = salles
        .save(&new_salle("s1", Some(new_cinema("missing", "Nowhere"))))
        .await
        .unwrap();
    assert!(saved.cinema.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_film_resolves_full_chain(pool: PgPool) {
    let cinema = CinemaRepo::new(pool.clone())
        .save(&new_cinema("c1", "Pathé"))
        .await
        .unwrap();
    let salle = SalleRepo::new(pool.clone())
        .save(&new_salle("s1", Some(cinema)))
        .await
        .unwrap();
    let seance = SeanceRepo::new(pool.clone())
        .save(&new_seance("se1", Some(salle)))
        .await
        .unwrap();

    let film = Film {
        id: "dfghjk".to_string(),
        title: "La dernière".to_string(),
        duration: 120.0,
        seance: Some(seance),
    };
    let films = FilmRepo::new(pool);
    let saved = films.save(&film).await.unwrap();
    assert_eq!(saved, film);
    assert_eq!(films.find_by_id("dfghjk").await.unwrap(), Some(film));
}
