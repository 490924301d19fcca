use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::account::Account;
use crate::models::application::Application;
use crate::models::feedback::Feedback;
use crate::models::position::Position;
use crate::store::{ApplicationFilter, EntityStore, PositionFilter};

/// In-memory entity store backing the test suite and local development.
/// Mirrors the per-record last-write-wins semantics of the Postgres store.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    applications: HashMap<Uuid, Application>,
    positions: HashMap<Uuid, Position>,
    accounts: HashMap<Uuid, Account>,
    feedbacks: Vec<Feedback>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts are owned by the external IAM service, so there is no write
    /// path through the trait; tests seed them directly.
    pub fn seed_account(&self, account: Account) {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        inner.accounts.insert(account.id, account);
    }

    pub fn feedback_count(&self) -> usize {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        inner.feedbacks.len()
    }
}

#[async_trait]
impl EntityStore for MemStore {
    async fn insert_application(&self, app: &Application) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        inner.applications.insert(app.id, app.clone());
        Ok(())
    }

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        Ok(inner.applications.get(&id).cloned())
    }

    async fn update_application(&self, app: &Application) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        if !inner.applications.contains_key(&app.id) {
            return Err(Error::NotFound(format!(
                "Postulación con ID {} no encontrada",
                app.id
            )));
        }
        inner.applications.insert(app.id, app.clone());
        Ok(())
    }

    async fn list_applications(&self, filter: &ApplicationFilter) -> Result<Vec<Application>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        let mut items: Vec<Application> = inner
            .applications
            .values()
            .filter(|app| {
                filter
                    .candidato_id
                    .map_or(true, |id| app.candidato_id == id)
                    && filter.puesto_id.map_or(true, |id| app.puesto_id == id)
                    && filter.estado.map_or(true, |estado| app.estado == estado)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.fecha_postulacion
                .cmp(&b.fecha_postulacion)
                .then(a.id.cmp(&b.id))
        });
        Ok(items)
    }

    async fn insert_position(&self, position: &Position) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        inner.positions.insert(position.id, position.clone());
        Ok(())
    }

    async fn get_position(&self, id: Uuid) -> Result<Option<Position>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        Ok(inner.positions.get(&id).cloned())
    }

    async fn update_position(&self, position: &Position) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        if !inner.positions.contains_key(&position.id) {
            return Err(Error::NotFound(format!(
                "Puesto con ID {} no encontrado",
                position.id
            )));
        }
        inner.positions.insert(position.id, position.clone());
        Ok(())
    }

    async fn list_positions(&self, filter: &PositionFilter) -> Result<Vec<Position>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        let mut items: Vec<Position> = inner
            .positions
            .values()
            .filter(|p| {
                filter.empresa_id.map_or(true, |id| p.empresa_id == id)
                    && filter.estado.map_or(true, |estado| p.estado == estado)
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| b.fecha_publicacion.cmp(&a.fecha_publicacion));
        Ok(items)
    }

    async fn positions_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Position>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        Ok(ids
            .iter()
            .filter_map(|id| inner.positions.get(id).map(|p| (*id, p.clone())))
            .collect())
    }

    async fn accounts_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Account>> {
        let inner = self.inner.lock().expect("mem store mutex poisoned");
        Ok(ids
            .iter()
            .filter_map(|id| inner.accounts.get(id).map(|a| (*id, a.clone())))
            .collect())
    }

    async fn insert_feedback(&self, feedback: &Feedback) -> Result<()> {
        let mut inner = self.inner.lock().expect("mem store mutex poisoned");
        inner.feedbacks.push(feedback.clone());
        Ok(())
    }
}
