use std::env;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use uuid::Uuid;

use postulaciones_backend::models::application::{Application, EstadoPostulacion};
use postulaciones_backend::store::{EntityStore, MemStore};
use postulaciones_backend::{build_router, AppState};

fn setup() -> (Router, Arc<MemStore>) {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "postgres://localhost/unused");
    env::set_var("JWT_SECRET", "test_secret_key");
    let _ = postulaciones_backend::config::init_config();

    let store = Arc::new(MemStore::new());
    let app = build_router(AppState::new(store.clone()));
    (app, store)
}

async fn get(app: &Router, path: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request");
    let resp = app.clone().oneshot(req).await.expect("request");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

async fn seed(store: &MemStore, cuenta_id: Uuid, estados: &[EstadoPostulacion]) {
    for estado in estados {
        let mut app = Application::new(cuenta_id, Uuid::new_v4(), Vec::new());
        if *estado != EstadoPostulacion::Pendiente {
            app.cambiar_estado(*estado);
        }
        store.insert_application(&app).await.expect("seed");
    }
}

#[tokio::test]
async fn one_success_of_two_yields_fifty_percent() {
    let (app, store) = setup();
    let cuenta_id = Uuid::new_v4();
    seed(
        &store,
        cuenta_id,
        &[EstadoPostulacion::Aceptado, EstadoPostulacion::Rechazado],
    )
    .await;

    let (status, body) = get(&app, &format!("/metricas/resumen/{}", cuenta_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_postulaciones"], 2);
    assert_eq!(body["total_exitos"], 1);
    assert_eq!(body["total_rechazos"], 1);
    assert_eq!(body["tasa_exito"], 50.0);
}

#[tokio::test]
async fn unknown_account_has_no_metrics() {
    let (app, _store) = setup();
    let (status, body) = get(&app, &format!("/metricas/resumen/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());

    let (status, _) = get(&app, &format!("/metricas/recalcular/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recalculating_matches_the_summary() {
    let (app, store) = setup();
    let cuenta_id = Uuid::new_v4();
    seed(
        &store,
        cuenta_id,
        &[
            EstadoPostulacion::Oferta,
            EstadoPostulacion::Entrevista,
            EstadoPostulacion::Pendiente,
        ],
    )
    .await;

    let (_, resumen) = get(&app, &format!("/metricas/resumen/{}", cuenta_id)).await;
    let (status, recalculado) = get(&app, &format!("/metricas/recalcular/{}", cuenta_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resumen, recalculado);
}

#[tokio::test]
async fn achievements_unlock_at_their_thresholds() {
    let (app, store) = setup();
    let cuenta_id = Uuid::new_v4();
    seed(&store, cuenta_id, &[EstadoPostulacion::Oferta]).await;

    let (status, body) = get(&app, &format!("/metricas/logros/{}", cuenta_id)).await;
    assert_eq!(status, StatusCode::OK);
    let logros = body.as_array().unwrap();
    assert_eq!(logros.len(), 1);
    assert_eq!(logros[0]["id_logro"], "primera-oferta");
    assert_eq!(logros[0]["umbral"], 1);
    assert!(logros[0]["fecha_obtencion"].is_string());
}

#[tokio::test]
async fn an_account_without_applications_has_no_achievements() {
    let (app, _store) = setup();
    let (status, body) = get(&app, &format!("/metricas/logros/{}", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn narrow_counters_count_one_status_each() {
    let (app, store) = setup();
    let cuenta_id = Uuid::new_v4();
    seed(
        &store,
        cuenta_id,
        &[
            EstadoPostulacion::Oferta,
            EstadoPostulacion::Oferta,
            EstadoPostulacion::Entrevista,
            EstadoPostulacion::Rechazado,
            EstadoPostulacion::Aceptado,
        ],
    )
    .await;

    let (status, ofertas) = get(
        &app,
        &format!("/metricas/contadores/ofertas/{}", cuenta_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ofertas["postulante_id"], cuenta_id.to_string());
    assert_eq!(ofertas["total"], 2);

    let (_, entrevistas) = get(
        &app,
        &format!("/metricas/contadores/entrevistas/{}", cuenta_id),
    )
    .await;
    assert_eq!(entrevistas["total"], 1);

    let (_, rechazos) = get(
        &app,
        &format!("/metricas/contadores/rechazos/{}", cuenta_id),
    )
    .await;
    assert_eq!(rechazos["total"], 1);
}

#[tokio::test]
async fn counters_for_an_unknown_account_are_zero() {
    let (app, _store) = setup();
    let (status, body) = get(
        &app,
        &format!("/metricas/contadores/ofertas/{}", Uuid::new_v4()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}
