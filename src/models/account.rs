use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rol {
    Postulante,
    Empresa,
    Admin,
}

/// Account record owned by the external IAM service. The engine only ever
/// reads these, to enrich applications and resolve company ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub rol: Rol,
    pub nombre_completo: String,
    pub email: String,
    pub carrera: Option<String>,
    pub telefono: Option<String>,
    pub ciudad: Option<String>,
    pub estado: String,
}
