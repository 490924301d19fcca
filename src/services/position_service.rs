use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::dto::puesto_dto::{PuestoCreate, PuestoUpdate};
use crate::error::{Error, Result};
use crate::models::position::{EstadoPuesto, Position, TipoContrato};
use crate::store::{EntityStore, PositionFilter};

/// Plain record store passthrough for positions. No lifecycle beyond
/// open/closed; closing stamps `fecha_cierre` exactly once.
#[derive(Clone)]
pub struct PositionService {
    store: Arc<dyn EntityStore>,
}

impl PositionService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, payload: PuestoCreate) -> Result<Position> {
        validate_salary_range(payload.salario_min, payload.salario_max)?;
        let tipo_contrato = match payload.tipo_contrato.as_deref() {
            Some(raw) => TipoContrato::parse(raw)
                .ok_or_else(|| Error::BadRequest(format!("Tipo de contrato no válido: {}", raw)))?,
            None => TipoContrato::TiempoCompleto,
        };

        let position = Position {
            id: Uuid::new_v4(),
            empresa_id: payload.empresa_id,
            titulo: payload.titulo,
            descripcion: payload.descripcion,
            ubicacion: payload.ubicacion,
            salario_min: payload.salario_min,
            salario_max: payload.salario_max,
            moneda: payload.moneda.unwrap_or_else(|| "MXN".to_string()),
            tipo_contrato,
            fecha_publicacion: Utc::now(),
            fecha_cierre: None,
            estado: EstadoPuesto::Abierto,
        };
        self.store.insert_position(&position).await?;
        info!(puesto_id = %position.id, empresa_id = %position.empresa_id, "position created");
        Ok(position)
    }

    pub async fn get(&self, id: Uuid) -> Result<Position> {
        self.store
            .get_position(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Puesto con ID {} no encontrado", id)))
    }

    pub async fn list(&self, filter: PositionFilter) -> Result<Vec<Position>> {
        self.store.list_positions(&filter).await
    }

    pub async fn update(&self, id: Uuid, payload: PuestoUpdate) -> Result<Position> {
        let mut position = self.get(id).await?;
        if position.estado == EstadoPuesto::Cerrado {
            return Err(Error::BadRequest(
                "No se puede actualizar un puesto cerrado".to_string(),
            ));
        }

        if let Some(titulo) = payload.titulo {
            position.titulo = titulo;
        }
        if let Some(descripcion) = payload.descripcion {
            position.descripcion = descripcion;
        }
        if let Some(ubicacion) = payload.ubicacion {
            position.ubicacion = ubicacion;
        }
        if payload.salario_min.is_some() {
            position.salario_min = payload.salario_min;
        }
        if payload.salario_max.is_some() {
            position.salario_max = payload.salario_max;
        }
        if let Some(moneda) = payload.moneda {
            position.moneda = moneda;
        }
        if let Some(raw) = payload.tipo_contrato.as_deref() {
            position.tipo_contrato = TipoContrato::parse(raw)
                .ok_or_else(|| Error::BadRequest(format!("Tipo de contrato no válido: {}", raw)))?;
        }
        validate_salary_range(position.salario_min, position.salario_max)?;

        self.store.update_position(&position).await?;
        Ok(position)
    }

    pub async fn set_estado(&self, id: Uuid, estado_raw: &str) -> Result<Position> {
        let target = EstadoPuesto::parse(estado_raw)
            .ok_or_else(|| Error::BadRequest(format!("Estado de puesto no válido: {}", estado_raw)))?;
        let mut position = self.get(id).await?;

        match target {
            EstadoPuesto::Cerrado => {
                if !position.cerrar() {
                    return Err(Error::BadRequest("El puesto ya está cerrado".to_string()));
                }
            }
            EstadoPuesto::Abierto => {
                if position.estado == EstadoPuesto::Cerrado {
                    return Err(Error::BadRequest(
                        "Un puesto cerrado no puede reabrirse".to_string(),
                    ));
                }
                // already open, nothing to do
            }
        }

        self.store.update_position(&position).await?;
        info!(puesto_id = %position.id, estado = estado_raw, "position status updated");
        Ok(position)
    }
}

fn validate_salary_range(min: Option<f64>, max: Option<f64>) -> Result<()> {
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::BadRequest(
                "El salario mínimo no puede ser mayor que el máximo".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn payload() -> PuestoCreate {
        PuestoCreate {
            empresa_id: Uuid::new_v4(),
            titulo: "DevOps".into(),
            descripcion: "Infraestructura".into(),
            ubicacion: "Remoto".into(),
            salario_min: Some(30000.0),
            salario_max: Some(45000.0),
            moneda: None,
            tipo_contrato: Some("tiempo_completo".into()),
        }
    }

    fn service() -> PositionService {
        PositionService::new(Arc::new(MemStore::new()))
    }

    #[tokio::test]
    async fn create_defaults_to_open_and_mxn() {
        let position = service().create(payload()).await.unwrap();
        assert_eq!(position.estado, EstadoPuesto::Abierto);
        assert_eq!(position.moneda, "MXN");
        assert!(position.fecha_cierre.is_none());
    }

    #[tokio::test]
    async fn inverted_salary_range_is_rejected() {
        let mut bad = payload();
        bad.salario_min = Some(50000.0);
        bad.salario_max = Some(20000.0);
        let err = service().create(bad).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn closing_stamps_fecha_cierre_and_rejects_reopen() {
        let service = service();
        let position = service.create(payload()).await.unwrap();

        let closed = service.set_estado(position.id, "cerrado").await.unwrap();
        assert_eq!(closed.estado, EstadoPuesto::Cerrado);
        assert!(closed.fecha_cierre.is_some());

        let err = service.set_estado(position.id, "cerrado").await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let err = service.set_estado(position.id, "abierto").await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[tokio::test]
    async fn closed_positions_cannot_be_updated() {
        let service = service();
        let position = service.create(payload()).await.unwrap();
        service.set_estado(position.id, "cerrado").await.unwrap();

        let err = service
            .update(
                position.id,
                PuestoUpdate {
                    titulo: Some("Otro".into()),
                    descripcion: None,
                    ubicacion: None,
                    salario_min: None,
                    salario_max: None,
                    moneda: None,
                    tipo_contrato: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
