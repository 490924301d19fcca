use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::dto::postulacion_dto::{PostulacionCreate, PostulacionEnriquecida};
use crate::error::{Error, Result};
use crate::models::application::{Application, EstadoPostulacion, TransitionPolicy};
use crate::services::enrichment_service::EnrichmentService;
use crate::store::{ApplicationFilter, EntityStore};

/// Lifecycle controller for applications: creation against an open
/// position, status transitions with milestone stamping, and reads.
/// All side effects stay within the single application record.
#[derive(Clone)]
pub struct ApplicationService {
    store: Arc<dyn EntityStore>,
    enrichment: EnrichmentService,
    policy: TransitionPolicy,
}

impl ApplicationService {
    pub fn new(store: Arc<dyn EntityStore>, enrichment: EnrichmentService) -> Self {
        Self::with_policy(store, enrichment, TransitionPolicy::default())
    }

    pub fn with_policy(
        store: Arc<dyn EntityStore>,
        enrichment: EnrichmentService,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            store,
            enrichment,
            policy,
        }
    }

    pub async fn create(&self, payload: PostulacionCreate) -> Result<PostulacionEnriquecida> {
        let position = self.store.get_position(payload.puesto_id).await?;
        let open = position.map(|p| p.is_open()).unwrap_or(false);
        if !open {
            return Err(Error::BadRequest(
                "El puesto no existe o no está disponible para postulación".to_string(),
            ));
        }

        let app = Application::new(
            payload.candidato_id,
            payload.puesto_id,
            payload.documentos_adjuntos,
        );
        self.store.insert_application(&app).await?;
        info!(
            postulacion_id = %app.id,
            candidato_id = %app.candidato_id,
            puesto_id = %app.puesto_id,
            "application created"
        );
        self.enrichment.enrich_one(app).await
    }

    pub async fn set_status(
        &self,
        id: Uuid,
        nuevo_estado: &str,
    ) -> Result<PostulacionEnriquecida> {
        let estado = EstadoPostulacion::parse(nuevo_estado).ok_or_else(|| {
            Error::BadRequest(format!("Estado de postulación no válido: {}", nuevo_estado))
        })?;

        let mut app = self
            .store
            .get_application(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Postulación con ID {} no encontrada", id)))?;

        if !self.policy.allows(app.estado, estado) {
            return Err(Error::BadRequest(format!(
                "Transición no permitida de {} a {}",
                app.estado, estado
            )));
        }

        app.cambiar_estado(estado);
        self.store.update_application(&app).await?;
        info!(postulacion_id = %app.id, estado = %estado, "application status updated");
        self.enrichment.enrich_one(app).await
    }

    pub async fn get(&self, id: Uuid) -> Result<PostulacionEnriquecida> {
        let app = self
            .store
            .get_application(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Postulación con ID {} no encontrada", id)))?;
        self.enrichment.enrich_one(app).await
    }

    pub async fn list(
        &self,
        filter: ApplicationFilter,
        enriquecer: bool,
    ) -> Result<Vec<PostulacionEnriquecida>> {
        let apps = self.store.list_applications(&filter).await?;
        if enriquecer {
            self.enrichment.enrich(apps).await
        } else {
            Ok(apps.into_iter().map(PostulacionEnriquecida::from).collect())
        }
    }
}
