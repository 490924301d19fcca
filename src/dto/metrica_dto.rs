use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::achievement_service::Achievement;
use crate::services::metrics_service::MetricsSnapshot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricaResumenResponse {
    pub cuenta_id: Uuid,
    pub total_postulaciones: i64,
    pub total_entrevistas: i64,
    pub total_exitos: i64,
    pub total_rechazos: i64,
    pub tasa_exito: f64,
}

impl From<MetricsSnapshot> for MetricaResumenResponse {
    fn from(snapshot: MetricsSnapshot) -> Self {
        Self {
            cuenta_id: snapshot.cuenta_id,
            total_postulaciones: snapshot.total_postulaciones,
            total_entrevistas: snapshot.total_entrevistas,
            total_exitos: snapshot.total_exitos,
            total_rechazos: snapshot.total_rechazos,
            tasa_exito: snapshot.tasa_exito,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogroResponse {
    pub id_logro: String,
    pub nombre_logro: String,
    pub umbral: i64,
    pub fecha_obtencion: DateTime<Utc>,
}

impl From<Achievement> for LogroResponse {
    fn from(achievement: Achievement) -> Self {
        Self {
            id_logro: achievement.id.to_string(),
            nombre_logro: achievement.nombre.to_string(),
            umbral: achievement.umbral,
            fecha_obtencion: achievement.fecha_obtencion,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContadorResponse {
    pub postulante_id: Uuid,
    pub total: i64,
}
