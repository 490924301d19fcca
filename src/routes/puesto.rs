use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::puesto_dto::{EstadoPuestoUpdate, PuestoCreate, PuestoListQuery, PuestoResponse, PuestoUpdate},
    error::{Error, Result},
    models::position::EstadoPuesto,
    store::PositionFilter,
    AppState,
};

#[axum::debug_handler]
pub async fn crear_puesto(
    State(state): State<AppState>,
    Json(payload): Json<PuestoCreate>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let position = state.position_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(PuestoResponse::from(position))))
}

#[axum::debug_handler]
pub async fn obtener_puesto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let position = state.position_service.get(id).await?;
    Ok(Json(PuestoResponse::from(position)))
}

#[axum::debug_handler]
pub async fn listar_puestos(
    State(state): State<AppState>,
    Query(query): Query<PuestoListQuery>,
) -> Result<impl IntoResponse> {
    let estado = match query.estado.as_deref() {
        Some(raw) => Some(
            EstadoPuesto::parse(raw)
                .ok_or_else(|| Error::BadRequest(format!("Estado de puesto no válido: {}", raw)))?,
        ),
        None => None,
    };
    let filter = PositionFilter {
        empresa_id: query.empresa_id,
        estado,
    };
    let positions = state.position_service.list(filter).await?;
    let body: Vec<PuestoResponse> = positions.into_iter().map(PuestoResponse::from).collect();
    Ok(Json(body))
}

#[axum::debug_handler]
pub async fn actualizar_puesto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PuestoUpdate>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let position = state.position_service.update(id, payload).await?;
    Ok(Json(PuestoResponse::from(position)))
}

#[axum::debug_handler]
pub async fn actualizar_estado_puesto(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EstadoPuestoUpdate>,
) -> Result<impl IntoResponse> {
    let position = state.position_service.set_estado(id, &payload.estado).await?;
    Ok(Json(PuestoResponse::from(position)))
}
