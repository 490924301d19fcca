use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::feedback::Feedback;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCreate {
    pub postulacion_id: Uuid,
    pub empresa_id: Uuid,
    pub perfil_id: Uuid,
    pub tipo_feedback: String,
    pub mensaje_texto: Option<String>,
    pub motivo_rechazo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback_id: Uuid,
    pub postulacion_id: Uuid,
    pub tipo_feedback: String,
    pub mensaje: Option<String>,
    pub fecha_envio: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(feedback: Feedback) -> Self {
        Self {
            feedback_id: feedback.id,
            postulacion_id: feedback.postulacion_id,
            tipo_feedback: feedback.tipo_feedback.as_str().to_string(),
            mensaje: feedback.mensaje_texto,
            fecha_envio: feedback.fecha_envio,
        }
    }
}
