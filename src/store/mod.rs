pub mod memory;
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::account::Account;
use crate::models::application::{Application, EstadoPostulacion};
use crate::models::feedback::Feedback;
use crate::models::position::{EstadoPuesto, Position};

pub use memory::MemStore;
pub use postgres::PgStore;

#[derive(Debug, Clone, Default)]
pub struct ApplicationFilter {
    pub candidato_id: Option<Uuid>,
    pub puesto_id: Option<Uuid>,
    pub estado: Option<EstadoPostulacion>,
}

#[derive(Debug, Clone, Default)]
pub struct PositionFilter {
    pub empresa_id: Option<Uuid>,
    pub estado: Option<EstadoPuesto>,
}

/// Durable record store for the four entity kinds. The engine treats it as
/// an external collaborator: per-record writes are last-write-wins and
/// reads are not isolated from concurrent writes.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn insert_application(&self, app: &Application) -> Result<()>;
    async fn get_application(&self, id: Uuid) -> Result<Option<Application>>;
    async fn update_application(&self, app: &Application) -> Result<()>;
    async fn list_applications(&self, filter: &ApplicationFilter) -> Result<Vec<Application>>;

    async fn insert_position(&self, position: &Position) -> Result<()>;
    async fn get_position(&self, id: Uuid) -> Result<Option<Position>>;
    async fn update_position(&self, position: &Position) -> Result<()>;
    async fn list_positions(&self, filter: &PositionFilter) -> Result<Vec<Position>>;
    async fn positions_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Position>>;

    async fn accounts_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Account>>;

    async fn insert_feedback(&self, feedback: &Feedback) -> Result<()>;
}
