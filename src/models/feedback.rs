use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoFeedback {
    Aprobacion,
    Rechazo,
    Comentario,
    Otro,
}

impl TipoFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoFeedback::Aprobacion => "aprobacion",
            TipoFeedback::Rechazo => "rechazo",
            TipoFeedback::Comentario => "comentario",
            TipoFeedback::Otro => "otro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "aprobacion" => Some(TipoFeedback::Aprobacion),
            "rechazo" => Some(TipoFeedback::Rechazo),
            "comentario" => Some(TipoFeedback::Comentario),
            "otro" => Some(TipoFeedback::Otro),
            _ => None,
        }
    }
}

/// One-shot company-to-candidate message attached to an application.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub postulacion_id: Uuid,
    pub empresa_id: Uuid,
    pub perfil_id: Uuid,
    pub tipo_feedback: TipoFeedback,
    pub mensaje_texto: Option<String>,
    pub motivo_rechazo: Option<String>,
    pub fecha_envio: DateTime<Utc>,
}
