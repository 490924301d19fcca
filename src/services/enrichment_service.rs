use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::dto::postulacion_dto::{CandidatoInfo, EmpresaInfo, PostulacionEnriquecida, PuestoInfo};
use crate::error::Result;
use crate::models::account::Account;
use crate::models::application::Application;
use crate::models::position::Position;
use crate::store::EntityStore;

/// Assembles the composite view of applications: base fields plus nested
/// candidate, position and company summaries.
///
/// Related entities are resolved in batches, one fetch per entity kind per
/// request, and fanned back out by key. A dangling reference or a failed
/// batch fetch degrades that nested object to absent; the base application
/// fields always survive.
#[derive(Clone)]
pub struct EnrichmentService {
    store: Arc<dyn EntityStore>,
}

impl EnrichmentService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn enrich_one(&self, app: Application) -> Result<PostulacionEnriquecida> {
        let mut views = self.enrich(vec![app]).await?;
        Ok(views.remove(0))
    }

    pub async fn enrich(&self, apps: Vec<Application>) -> Result<Vec<PostulacionEnriquecida>> {
        let candidato_ids = distinct(apps.iter().map(|a| a.candidato_id));
        let puesto_ids = distinct(apps.iter().map(|a| a.puesto_id));

        let candidatos = self.fetch_accounts(&candidato_ids).await;
        let puestos = self.fetch_positions(&puesto_ids).await;

        let empresa_ids = distinct(puestos.values().map(|p| p.empresa_id));
        let empresas = self.fetch_accounts(&empresa_ids).await;

        Ok(apps
            .into_iter()
            .map(|app| {
                let candidato = candidatos.get(&app.candidato_id).map(CandidatoInfo::from);
                let puesto = puestos.get(&app.puesto_id);
                let empresa = puesto
                    .and_then(|p| empresas.get(&p.empresa_id))
                    .map(EmpresaInfo::from);
                let mut view = PostulacionEnriquecida::from(app);
                view.candidato = candidato;
                view.puesto = puesto.map(PuestoInfo::from);
                view.empresa = empresa;
                view
            })
            .collect())
    }

    async fn fetch_accounts(&self, ids: &[Uuid]) -> HashMap<Uuid, Account> {
        match self.store.accounts_by_ids(ids).await {
            Ok(map) => map,
            Err(err) => {
                warn!(error = %err, "batch account resolution failed, returning base fields");
                HashMap::new()
            }
        }
    }

    async fn fetch_positions(&self, ids: &[Uuid]) -> HashMap<Uuid, Position> {
        match self.store.positions_by_ids(ids).await {
            Ok(map) => map,
            Err(err) => {
                warn!(error = %err, "batch position resolution failed, returning base fields");
                HashMap::new()
            }
        }
    }
}

fn distinct(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen: Vec<Uuid> = Vec::new();
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::Rol;
    use crate::models::application::EstadoPostulacion;
    use crate::models::position::{EstadoPuesto, TipoContrato};
    use crate::store::MemStore;
    use chrono::Utc;

    fn account(id: Uuid, rol: Rol, nombre: &str) -> Account {
        Account {
            id,
            rol,
            nombre_completo: nombre.into(),
            email: format!("{}@example.com", nombre.to_lowercase().replace(' ', ".")),
            carrera: Some("Sistemas".into()),
            telefono: None,
            ciudad: Some("Monterrey".into()),
            estado: "activa".into(),
        }
    }

    fn position(id: Uuid, empresa_id: Uuid) -> Position {
        Position {
            id,
            empresa_id,
            titulo: "Data Engineer".into(),
            descripcion: "Pipelines".into(),
            ubicacion: "Remoto".into(),
            salario_min: None,
            salario_max: None,
            moneda: "MXN".into(),
            tipo_contrato: TipoContrato::TiempoCompleto,
            fecha_publicacion: Utc::now(),
            fecha_cierre: None,
            estado: EstadoPuesto::Abierto,
        }
    }

    #[tokio::test]
    async fn enriched_view_matches_source_records() {
        let store = MemStore::new();
        let candidato_id = Uuid::new_v4();
        let empresa_id = Uuid::new_v4();
        let puesto_id = Uuid::new_v4();
        store.seed_account(account(candidato_id, Rol::Postulante, "Ana Torres"));
        store.seed_account(account(empresa_id, Rol::Empresa, "Acme"));
        let pos = position(puesto_id, empresa_id);
        store.insert_position(&pos).await.unwrap();

        let app = Application::new(candidato_id, puesto_id, Vec::new());
        let service = EnrichmentService::new(Arc::new(store));
        let view = service.enrich_one(app.clone()).await.unwrap();

        assert_eq!(view.postulacion_id, app.id);
        assert_eq!(view.estado, EstadoPostulacion::Pendiente);
        let candidato = view.candidato.unwrap();
        assert_eq!(candidato.nombre_completo, "Ana Torres");
        assert_eq!(candidato.ciudad.as_deref(), Some("Monterrey"));
        let puesto = view.puesto.unwrap();
        assert_eq!(puesto.titulo, "Data Engineer");
        assert_eq!(puesto.empresa_id, empresa_id);
        let empresa = view.empresa.unwrap();
        assert_eq!(empresa.nombre, "Acme");
    }

    #[tokio::test]
    async fn dangling_references_do_not_abort_the_response() {
        let store = MemStore::new();
        let app = Application::new(Uuid::new_v4(), Uuid::new_v4(), Vec::new());
        let service = EnrichmentService::new(Arc::new(store));
        let view = service.enrich_one(app.clone()).await.unwrap();

        assert_eq!(view.postulacion_id, app.id);
        assert!(view.candidato.is_none());
        assert!(view.puesto.is_none());
        assert!(view.empresa.is_none());
    }

    #[tokio::test]
    async fn company_resolves_through_the_position() {
        let store = MemStore::new();
        let empresa_id = Uuid::new_v4();
        let puesto_id = Uuid::new_v4();
        store.seed_account(account(empresa_id, Rol::Empresa, "Globex"));
        let pos = position(puesto_id, empresa_id);
        store.insert_position(&pos).await.unwrap();

        // candidate unknown, position and company known
        let app = Application::new(Uuid::new_v4(), puesto_id, Vec::new());
        let service = EnrichmentService::new(Arc::new(store));
        let view = service.enrich_one(app).await.unwrap();

        assert!(view.candidato.is_none());
        assert!(view.puesto.is_some());
        assert_eq!(view.empresa.unwrap().empresa_id, empresa_id);
    }
}
