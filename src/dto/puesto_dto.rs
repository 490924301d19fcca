use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::position::Position;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PuestoCreate {
    pub empresa_id: Uuid,
    #[validate(length(min = 1))]
    pub titulo: String,
    #[validate(length(min = 1))]
    pub descripcion: String,
    #[validate(length(min = 1))]
    pub ubicacion: String,
    pub salario_min: Option<f64>,
    pub salario_max: Option<f64>,
    pub moneda: Option<String>,
    pub tipo_contrato: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PuestoUpdate {
    #[validate(length(min = 1))]
    pub titulo: Option<String>,
    #[validate(length(min = 1))]
    pub descripcion: Option<String>,
    #[validate(length(min = 1))]
    pub ubicacion: Option<String>,
    pub salario_min: Option<f64>,
    pub salario_max: Option<f64>,
    pub moneda: Option<String>,
    pub tipo_contrato: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoPuestoUpdate {
    pub estado: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuestoListQuery {
    pub empresa_id: Option<Uuid>,
    pub estado: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuestoResponse {
    pub puesto_id: Uuid,
    pub empresa_id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub salario_min: Option<f64>,
    pub salario_max: Option<f64>,
    pub moneda: String,
    pub tipo_contrato: String,
    pub fecha_publicacion: DateTime<Utc>,
    pub fecha_cierre: Option<DateTime<Utc>>,
    pub estado: String,
}

impl From<Position> for PuestoResponse {
    fn from(position: Position) -> Self {
        Self {
            puesto_id: position.id,
            empresa_id: position.empresa_id,
            titulo: position.titulo,
            descripcion: position.descripcion,
            ubicacion: position.ubicacion,
            salario_min: position.salario_min,
            salario_max: position.salario_max,
            moneda: position.moneda,
            tipo_contrato: position.tipo_contrato.as_str().to_string(),
            fecha_publicacion: position.fecha_publicacion,
            fecha_cierre: position.fecha_cierre,
            estado: position.estado.as_str().to_string(),
        }
    }
}
