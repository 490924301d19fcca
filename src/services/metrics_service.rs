use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::application::{Application, EstadoPostulacion};
use crate::store::{ApplicationFilter, EntityStore};

/// Per-account counters derived from the current status of the account's
/// applications. Nothing here is persisted: every call is a fresh scan, so
/// a "recalculate" is just another read.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub cuenta_id: Uuid,
    pub total_postulaciones: i64,
    pub total_entrevistas: i64,
    pub total_exitos: i64,
    pub total_rechazos: i64,
    pub tasa_exito: f64,
}

#[derive(Clone)]
pub struct MetricsService {
    store: Arc<dyn EntityStore>,
}

impl MetricsService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Full summary for one account. An account with zero applications is
    /// reported as not found rather than as a zero-valued snapshot.
    pub async fn summarize(&self, cuenta_id: Uuid) -> Result<MetricsSnapshot> {
        let apps = self.applications_of(cuenta_id).await?;
        if apps.is_empty() {
            return Err(Error::NotFound(format!(
                "No se encontraron métricas para la cuenta {}",
                cuenta_id
            )));
        }
        Ok(compute_snapshot(cuenta_id, &apps))
    }

    pub async fn count_ofertas(&self, postulante_id: Uuid) -> Result<i64> {
        self.count_by(postulante_id, |estado| estado == EstadoPostulacion::Oferta)
            .await
    }

    pub async fn count_entrevistas(&self, postulante_id: Uuid) -> Result<i64> {
        self.count_by(postulante_id, |estado| {
            estado == EstadoPostulacion::Entrevista
        })
        .await
    }

    pub async fn count_rechazos(&self, postulante_id: Uuid) -> Result<i64> {
        self.count_by(postulante_id, |estado| {
            estado == EstadoPostulacion::Rechazado
        })
        .await
    }

    pub(crate) async fn applications_of(&self, cuenta_id: Uuid) -> Result<Vec<Application>> {
        self.store
            .list_applications(&ApplicationFilter {
                candidato_id: Some(cuenta_id),
                ..Default::default()
            })
            .await
    }

    async fn count_by(
        &self,
        postulante_id: Uuid,
        predicate: impl Fn(EstadoPostulacion) -> bool,
    ) -> Result<i64> {
        let apps = self.applications_of(postulante_id).await?;
        Ok(apps.iter().filter(|a| predicate(a.estado)).count() as i64)
    }
}

pub(crate) fn compute_snapshot(cuenta_id: Uuid, apps: &[Application]) -> MetricsSnapshot {
    let total = apps.len() as i64;
    let total_entrevistas = apps
        .iter()
        .filter(|a| a.estado == EstadoPostulacion::Entrevista)
        .count() as i64;
    let total_exitos = apps
        .iter()
        .filter(|a| {
            matches!(
                a.estado,
                EstadoPostulacion::Aceptado | EstadoPostulacion::Oferta
            )
        })
        .count() as i64;
    let total_rechazos = apps
        .iter()
        .filter(|a| a.estado == EstadoPostulacion::Rechazado)
        .count() as i64;

    MetricsSnapshot {
        cuenta_id,
        total_postulaciones: total,
        total_entrevistas,
        total_exitos,
        total_rechazos,
        tasa_exito: success_rate(total_exitos, total),
    }
}

/// exitos / total * 100, rounded to two decimals; zero for an empty set.
fn success_rate(exitos: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = exitos as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::application::Application;
    use crate::store::MemStore;

    async fn seed(store: &MemStore, cuenta_id: Uuid, estados: &[EstadoPostulacion]) {
        for estado in estados {
            let mut app = Application::new(cuenta_id, Uuid::new_v4(), Vec::new());
            if *estado != EstadoPostulacion::Pendiente {
                app.cambiar_estado(*estado);
            }
            store.insert_application(&app).await.unwrap();
        }
    }

    #[tokio::test]
    async fn summary_counts_by_current_status() {
        let store = MemStore::new();
        let cuenta_id = Uuid::new_v4();
        seed(
            &store,
            cuenta_id,
            &[
                EstadoPostulacion::Pendiente,
                EstadoPostulacion::Entrevista,
                EstadoPostulacion::Aceptado,
                EstadoPostulacion::Oferta,
                EstadoPostulacion::Rechazado,
            ],
        )
        .await;

        let service = MetricsService::new(Arc::new(store));
        let snapshot = service.summarize(cuenta_id).await.unwrap();

        assert_eq!(snapshot.total_postulaciones, 5);
        assert_eq!(snapshot.total_entrevistas, 1);
        assert_eq!(snapshot.total_exitos, 2);
        assert_eq!(snapshot.total_rechazos, 1);
        assert_eq!(snapshot.tasa_exito, 40.0);
        assert!(snapshot.total_exitos + snapshot.total_rechazos <= snapshot.total_postulaciones);
    }

    #[tokio::test]
    async fn empty_account_is_not_found() {
        let service = MetricsService::new(Arc::new(MemStore::new()));
        let err = service.summarize(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn one_accepted_of_two_is_fifty_percent() {
        let store = MemStore::new();
        let cuenta_id = Uuid::new_v4();
        seed(
            &store,
            cuenta_id,
            &[EstadoPostulacion::Aceptado, EstadoPostulacion::Rechazado],
        )
        .await;

        let service = MetricsService::new(Arc::new(store));
        let snapshot = service.summarize(cuenta_id).await.unwrap();
        assert_eq!(snapshot.tasa_exito, 50.0);
    }

    #[tokio::test]
    async fn rate_rounds_to_two_decimals() {
        let store = MemStore::new();
        let cuenta_id = Uuid::new_v4();
        seed(
            &store,
            cuenta_id,
            &[
                EstadoPostulacion::Oferta,
                EstadoPostulacion::Pendiente,
                EstadoPostulacion::Pendiente,
            ],
        )
        .await;

        let service = MetricsService::new(Arc::new(store));
        let snapshot = service.summarize(cuenta_id).await.unwrap();
        // 1/3 * 100 = 33.333... -> 33.33
        assert_eq!(snapshot.tasa_exito, 33.33);
    }

    #[tokio::test]
    async fn narrow_counters_agree_with_the_summary() {
        let store = MemStore::new();
        let cuenta_id = Uuid::new_v4();
        seed(
            &store,
            cuenta_id,
            &[
                EstadoPostulacion::Oferta,
                EstadoPostulacion::Oferta,
                EstadoPostulacion::Entrevista,
                EstadoPostulacion::Rechazado,
                EstadoPostulacion::Aceptado,
            ],
        )
        .await;

        let service = MetricsService::new(Arc::new(store));
        let snapshot = service.summarize(cuenta_id).await.unwrap();

        assert_eq!(service.count_ofertas(cuenta_id).await.unwrap(), 2);
        assert_eq!(
            service.count_entrevistas(cuenta_id).await.unwrap(),
            snapshot.total_entrevistas
        );
        assert_eq!(
            service.count_rechazos(cuenta_id).await.unwrap(),
            snapshot.total_rechazos
        );
        // ofertas counts only `oferta`; the summary's exitos also counts aceptado
        assert_eq!(snapshot.total_exitos, 3);
    }

    #[tokio::test]
    async fn counters_are_zero_for_unknown_accounts() {
        let service = MetricsService::new(Arc::new(MemStore::new()));
        assert_eq!(service.count_ofertas(Uuid::new_v4()).await.unwrap(), 0);
    }
}
