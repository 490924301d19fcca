use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, EstadoPostulacion};
use crate::store::{ApplicationFilter, EntityStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MetricKind {
    Postulaciones,
    Entrevistas,
    Exitos,
}

struct CatalogEntry {
    id: &'static str,
    nombre: &'static str,
    umbral: i64,
    metric: MetricKind,
}

/// Fixed, ordered achievement table. Thresholds and names come from the
/// product catalog; ids are stable slugs so clients can key on them.
const CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        id: "postulante-activo",
        nombre: "Postulante Activo",
        umbral: 10,
        metric: MetricKind::Postulaciones,
    },
    CatalogEntry {
        id: "entrevistado-frecuente",
        nombre: "Entrevistado Frecuente",
        umbral: 5,
        metric: MetricKind::Entrevistas,
    },
    CatalogEntry {
        id: "primera-oferta",
        nombre: "Primera Oferta",
        umbral: 1,
        metric: MetricKind::Exitos,
    },
    CatalogEntry {
        id: "candidato-destacado",
        nombre: "Candidato Destacado",
        umbral: 3,
        metric: MetricKind::Exitos,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub nombre: &'static str,
    pub umbral: i64,
    pub fecha_obtencion: DateTime<Utc>,
}

/// Derives earned achievements from the account's applications. Because
/// metrics are recomputed on demand rather than event-sourced, the date a
/// threshold was crossed is reconstructed: qualifying applications are
/// ordered by their activity timestamp and the umbral-th one marks the
/// crossing.
#[derive(Clone)]
pub struct AchievementService {
    store: Arc<dyn EntityStore>,
}

impl AchievementService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Earned achievements in catalog order; empty for an account with no
    /// applications.
    pub async fn achievements(&self, cuenta_id: Uuid) -> Result<Vec<Achievement>> {
        let apps = self
            .store
            .list_applications(&ApplicationFilter {
                candidato_id: Some(cuenta_id),
                ..Default::default()
            })
            .await?;
        Ok(evaluate(&apps))
    }
}

fn evaluate(apps: &[Application]) -> Vec<Achievement> {
    CATALOG
        .iter()
        .filter_map(|entry| {
            let mut fechas = qualifying_timestamps(apps, entry.metric);
            fechas.sort();
            if (fechas.len() as i64) < entry.umbral {
                return None;
            }
            Some(Achievement {
                id: entry.id,
                nombre: entry.nombre,
                umbral: entry.umbral,
                fecha_obtencion: fechas[(entry.umbral - 1) as usize],
            })
        })
        .collect()
}

fn qualifying_timestamps(apps: &[Application], metric: MetricKind) -> Vec<DateTime<Utc>> {
    match metric {
        MetricKind::Postulaciones => apps.iter().map(|a| a.fecha_postulacion).collect(),
        MetricKind::Entrevistas => apps
            .iter()
            .filter(|a| a.estado == EstadoPostulacion::Entrevista)
            .map(|a| a.fecha_actividad())
            .collect(),
        MetricKind::Exitos => apps
            .iter()
            .filter(|a| {
                matches!(
                    a.estado,
                    EstadoPostulacion::Aceptado | EstadoPostulacion::Oferta
                )
            })
            .map(|a| a.fecha_actividad())
            .collect(),
    }
}
