use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::account::Account;
use crate::models::application::{Application, Documento, EstadoPostulacion, Hito};
use crate::models::position::Position;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostulacionCreate {
    pub candidato_id: Uuid,
    pub puesto_id: Uuid,
    #[serde(default)]
    pub documentos_adjuntos: Vec<Documento>,
}

/// The target status arrives as a raw string so that values outside the
/// enum produce a 400 with the contract's error body instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstadoUpdate {
    pub nuevo_estado: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostulacionListQuery {
    pub candidato_id: Option<Uuid>,
    pub puesto_id: Option<Uuid>,
    pub estado: Option<String>,
    pub enriquecer: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatoInfo {
    pub cuenta_id: Uuid,
    pub nombre_completo: String,
    pub email: String,
    pub carrera: Option<String>,
    pub telefono: Option<String>,
    pub ciudad: Option<String>,
}

impl From<&Account> for CandidatoInfo {
    fn from(account: &Account) -> Self {
        Self {
            cuenta_id: account.id,
            nombre_completo: account.nombre_completo.clone(),
            email: account.email.clone(),
            carrera: account.carrera.clone(),
            telefono: account.telefono.clone(),
            ciudad: account.ciudad.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuestoInfo {
    pub puesto_id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub salario_min: Option<f64>,
    pub salario_max: Option<f64>,
    pub moneda: String,
    pub tipo_contrato: String,
    pub empresa_id: Uuid,
}

impl From<&Position> for PuestoInfo {
    fn from(position: &Position) -> Self {
        Self {
            puesto_id: position.id,
            titulo: position.titulo.clone(),
            descripcion: position.descripcion.clone(),
            ubicacion: position.ubicacion.clone(),
            salario_min: position.salario_min,
            salario_max: position.salario_max,
            moneda: position.moneda.clone(),
            tipo_contrato: position.tipo_contrato.as_str().to_string(),
            empresa_id: position.empresa_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpresaInfo {
    pub empresa_id: Uuid,
    pub nombre: String,
    pub email: String,
}

impl From<&Account> for EmpresaInfo {
    fn from(account: &Account) -> Self {
        Self {
            empresa_id: account.id,
            nombre: account.nombre_completo.clone(),
            email: account.email.clone(),
        }
    }
}

/// Composite view of an application. The nested objects are present only
/// when enrichment ran and the related entity resolved; a plain read with
/// `enriquecer=false` (or a dangling reference) leaves them out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostulacionEnriquecida {
    pub postulacion_id: Uuid,
    pub candidato_id: Uuid,
    pub puesto_id: Uuid,
    pub fecha_postulacion: DateTime<Utc>,
    pub estado: EstadoPostulacion,
    pub documentos_adjuntos: Vec<Documento>,
    pub hitos: Vec<Hito>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidato: Option<CandidatoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puesto: Option<PuestoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<EmpresaInfo>,
}

impl From<Application> for PostulacionEnriquecida {
    fn from(app: Application) -> Self {
        Self {
            postulacion_id: app.id,
            candidato_id: app.candidato_id,
            puesto_id: app.puesto_id,
            fecha_postulacion: app.fecha_postulacion,
            estado: app.estado,
            documentos_adjuntos: app.documentos_adjuntos,
            hitos: app.hitos,
            candidato: None,
            puesto: None,
            empresa: None,
        }
    }
}
