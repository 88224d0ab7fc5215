//! HTTP-level integration tests for the `/seances` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, delete_json, get, post_json, put_json};
use serde_json::json;

fn salle() -> serde_json::Value {
    json!({
        "id": "46nf45bx",
        "number": 1,
        "capacity": 99,
        "cinema": {"id": "111111111", "name": "Pathé"}
    })
}

async fn seed_salle(app: &axum::Router) {
    post_json(app.clone(), "/cinemas", json!({"id": "111111111", "name": "Pathé"})).await;
    post_json(app.clone(), "/salles", salle()).await;
}

#[tokio::test]
async fn test_seance_lifecycle() {
    let app = build_test_app();
    seed_salle(&app).await;

    let old = json!({"id": "sdfghjk", "date": "2024-03-01T20:30:00Z", "salle": salle()});
    let response = post_json(app.clone(), "/seances", old.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await, old);

    let new = json!({"id": "sdfghjk", "date": "2024-03-02T18:00:00Z", "salle": salle()});
    let response = put_json(app.clone(), "/seances", new.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated, new);
    assert_ne!(updated, old);

    let response = get(app.clone(), "/seances").await;
    assert_eq!(body_json(response).await, json!([new]));

    let response = delete(app.clone(), "/seances/sdfghjk").await;
    assert_eq!(body_json(response).await, json!(true));

    let response = get(app, "/seances/sdfghjk").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seance_without_salle() {
    let app = build_test_app();
    let seance = json!({"id": "se1", "date": "2024-03-01T20:30:00Z", "salle": null});

    let response = post_json(app.clone(), "/seances", seance.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(app, "/seances/se1").await;
    assert_eq!(body_json(response).await, seance);
}

#[tokio::test]
async fn test_seance_with_invalid_date_returns_400() {
    let response = post_json(
        build_test_app(),
        "/seances",
        json!({"id": "se1", "date": "tomorrow evening"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_by_body_ignores_fields_other_than_id() {
    let app = build_test_app();
    seed_salle(&app).await;
    post_json(
        app.clone(),
        "/seances",
        json!({"id": "sdfghjk", "date": "2024-03-01T20:30:00Z", "salle": salle()}),
    )
    .await;

    let body = json!({"id": "sdfghjk", "date": "1er mars", "salle": null});
    let response = delete_json(app.clone(), "/seances", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/seances/sdfghjk").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
