use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::dto::contacto_dto::FeedbackCreate;
use crate::error::{Error, Result};
use crate::models::feedback::{Feedback, TipoFeedback};
use crate::store::EntityStore;

/// One-shot feedback creation. The rest of the contact surface is
/// permanently disabled at the routing layer.
#[derive(Clone)]
pub struct FeedbackService {
    store: Arc<dyn EntityStore>,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: FeedbackCreate) -> Result<Feedback> {
        let tipo = TipoFeedback::parse(&payload.tipo_feedback).ok_or_else(|| {
            Error::BadRequest(format!(
                "Tipo de feedback no válido: {}",
                payload.tipo_feedback
            ))
        })?;

        if tipo == TipoFeedback::Rechazo
            && payload
                .motivo_rechazo
                .as_deref()
                .map(str::trim)
                .unwrap_or("")
                .is_empty()
        {
            return Err(Error::BadRequest(
                "El motivo de rechazo es obligatorio para feedback de tipo rechazo".to_string(),
            ));
        }

        if self
            .store
            .get_application(payload.postulacion_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!(
                "Postulación con ID {} no encontrada",
                payload.postulacion_id
            )));
        }

        let feedback = Feedback {
            id: Uuid::new_v4(),
            postulacion_id: payload.postulacion_id,
            empresa_id: payload.empresa_id,
            perfil_id: payload.perfil_id,
            tipo_feedback: tipo,
            mensaje_texto: payload.mensaje_texto,
            motivo_rechazo: payload.motivo_rechazo,
            fecha_envio: Utc::now(),
        };
        self.store.insert_feedback(&feedback).await?;
        info!(feedback_id = %feedback.id, postulacion_id = %feedback.postulacion_id, "feedback sent");
        Ok(feedback)
    }
}
