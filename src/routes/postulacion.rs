use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use crate::{
    dto::postulacion_dto::{EstadoUpdate, PostulacionCreate, PostulacionListQuery},
    error::{Error, Result},
    models::application::EstadoPostulacion,
    store::ApplicationFilter,
    AppState,
};

#[axum::debug_handler]
pub async fn crear_postulacion(
    State(state): State<AppState>,
    Json(payload): Json<PostulacionCreate>,
) -> Result<impl IntoResponse> {
    let view = state.application_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

#[axum::debug_handler]
pub async fn obtener_postulacion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let view = state.application_service.get(id).await?;
    Ok(Json(view))
}

#[axum::debug_handler]
pub async fn listar_postulaciones(
    State(state): State<AppState>,
    Query(query): Query<PostulacionListQuery>,
) -> Result<impl IntoResponse> {
    let estado = match query.estado.as_deref() {
        Some(raw) => Some(EstadoPostulacion::parse(raw).ok_or_else(|| {
            Error::BadRequest(format!("Estado de postulación no válido: {}", raw))
        })?),
        None => None,
    };
    let filter = ApplicationFilter {
        candidato_id: query.candidato_id,
        puesto_id: query.puesto_id,
        estado,
    };
    let views = state
        .application_service
        .list(filter, query.enriquecer.unwrap_or(true))
        .await?;
    Ok(Json(views))
}

#[axum::debug_handler]
pub async fn actualizar_estado(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EstadoUpdate>,
) -> Result<impl IntoResponse> {
    let view = state
        .application_service
        .set_status(id, &payload.nuevo_estado)
        .await?;
    Ok(Json(view))
}
