use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::metrica_dto::{ContadorResponse, LogroResponse, MetricaResumenResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn resumen(
    State(state): State<AppState>,
    Path(cuenta_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let snapshot = state.metrics_service.summarize(cuenta_id).await?;
    Ok(Json(MetricaResumenResponse::from(snapshot)))
}

#[axum::debug_handler]
pub async fn logros(
    State(state): State<AppState>,
    Path(cuenta_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let earned = state.achievement_service.achievements(cuenta_id).await?;
    let body: Vec<LogroResponse> = earned.into_iter().map(LogroResponse::from).collect();
    Ok(Json(body))
}

/// Metrics are derived on every read, so recalculating is just another
/// summary scan with the same not-found behavior.
#[axum::debug_handler]
pub async fn recalcular(
    State(state): State<AppState>,
    Path(cuenta_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let snapshot = state.metrics_service.summarize(cuenta_id).await?;
    Ok(Json(MetricaResumenResponse::from(snapshot)))
}

#[axum::debug_handler]
pub async fn contador_ofertas(
    State(state): State<AppState>,
    Path(postulante_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let total = state.metrics_service.count_ofertas(postulante_id).await?;
    Ok(Json(ContadorResponse {
        postulante_id,
        total,
    }))
}

#[axum::debug_handler]
pub async fn contador_entrevistas(
    State(state): State<AppState>,
    Path(postulante_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let total = state
        .metrics_service
        .count_entrevistas(postulante_id)
        .await?;
    Ok(Json(ContadorResponse {
        postulante_id,
        total,
    }))
}

#[axum::debug_handler]
pub async fn contador_rechazos(
    State(state): State<AppState>,
    Path(postulante_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let total = state.metrics_service.count_rechazos(postulante_id).await?;
    Ok(Json(ContadorResponse {
        postulante_id,
        total,
    }))
}
