use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::account::{Account, Rol};
use crate::models::application::{Application, Documento, EstadoPostulacion, Hito};
use crate::models::feedback::Feedback;
use crate::models::position::{EstadoPuesto, Position, TipoContrato};
use crate::store::{ApplicationFilter, EntityStore, PositionFilter};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ApplicationRow {
    id: Uuid,
    candidato_id: Uuid,
    puesto_id: Uuid,
    fecha_postulacion: DateTime<Utc>,
    estado: String,
    documentos_adjuntos: JsonValue,
    hitos: JsonValue,
}

impl TryFrom<ApplicationRow> for Application {
    type Error = Error;

    fn try_from(row: ApplicationRow) -> Result<Self> {
        let estado = EstadoPostulacion::parse(&row.estado)
            .ok_or_else(|| Error::Internal(format!("stored estado is invalid: {}", row.estado)))?;
        let documentos_adjuntos: Vec<Documento> = serde_json::from_value(row.documentos_adjuntos)?;
        let hitos: Vec<Hito> = serde_json::from_value(row.hitos)?;
        Ok(Application {
            id: row.id,
            candidato_id: row.candidato_id,
            puesto_id: row.puesto_id,
            fecha_postulacion: row.fecha_postulacion,
            estado,
            documentos_adjuntos,
            hitos,
        })
    }
}

#[derive(Debug, FromRow)]
struct PositionRow {
    id: Uuid,
    empresa_id: Uuid,
    titulo: String,
    descripcion: String,
    ubicacion: String,
    salario_min: Option<f64>,
    salario_max: Option<f64>,
    moneda: String,
    tipo_contrato: String,
    fecha_publicacion: DateTime<Utc>,
    fecha_cierre: Option<DateTime<Utc>>,
    estado: String,
}

impl TryFrom<PositionRow> for Position {
    type Error = Error;

    fn try_from(row: PositionRow) -> Result<Self> {
        let tipo_contrato = TipoContrato::parse(&row.tipo_contrato).ok_or_else(|| {
            Error::Internal(format!(
                "stored tipo_contrato is invalid: {}",
                row.tipo_contrato
            ))
        })?;
        let estado = EstadoPuesto::parse(&row.estado)
            .ok_or_else(|| Error::Internal(format!("stored estado is invalid: {}", row.estado)))?;
        Ok(Position {
            id: row.id,
            empresa_id: row.empresa_id,
            titulo: row.titulo,
            descripcion: row.descripcion,
            ubicacion: row.ubicacion,
            salario_min: row.salario_min,
            salario_max: row.salario_max,
            moneda: row.moneda,
            tipo_contrato,
            fecha_publicacion: row.fecha_publicacion,
            fecha_cierre: row.fecha_cierre,
            estado,
        })
    }
}

#[derive(Debug, FromRow)]
struct AccountRow {
    id: Uuid,
    rol: String,
    nombre_completo: String,
    email: String,
    carrera: Option<String>,
    telefono: Option<String>,
    ciudad: Option<String>,
    estado: String,
}

impl TryFrom<AccountRow> for Account {
    type Error = Error;

    fn try_from(row: AccountRow) -> Result<Self> {
        let rol = match row.rol.as_str() {
            "postulante" => Rol::Postulante,
            "empresa" => Rol::Empresa,
            "admin" => Rol::Admin,
            other => return Err(Error::Internal(format!("stored rol is invalid: {}", other))),
        };
        Ok(Account {
            id: row.id,
            rol,
            nombre_completo: row.nombre_completo,
            email: row.email,
            carrera: row.carrera,
            telefono: row.telefono,
            ciudad: row.ciudad,
            estado: row.estado,
        })
    }
}

const APPLICATION_COLUMNS: &str =
    "id, candidato_id, puesto_id, fecha_postulacion, estado, documentos_adjuntos, hitos";
const POSITION_COLUMNS: &str = "id, empresa_id, titulo, descripcion, ubicacion, salario_min, \
     salario_max, moneda, tipo_contrato, fecha_publicacion, fecha_cierre, estado";

#[async_trait]
impl EntityStore for PgStore {
    async fn insert_application(&self, app: &Application) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO postulaciones
                (id, candidato_id, puesto_id, fecha_postulacion, estado, documentos_adjuntos, hitos)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(app.id)
        .bind(app.candidato_id)
        .bind(app.puesto_id)
        .bind(app.fecha_postulacion)
        .bind(app.estado.as_str())
        .bind(serde_json::to_value(&app.documentos_adjuntos)?)
        .bind(serde_json::to_value(&app.hitos)?)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM postulaciones WHERE id = $1",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Application::try_from).transpose()
    }

    async fn update_application(&self, app: &Application) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE postulaciones
            SET estado = $2, documentos_adjuntos = $3, hitos = $4
            WHERE id = $1
            "#,
        )
        .bind(app.id)
        .bind(app.estado.as_str())
        .bind(serde_json::to_value(&app.documentos_adjuntos)?)
        .bind(serde_json::to_value(&app.hitos)?)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "Postulación con ID {} no encontrada",
                app.id
            )));
        }
        Ok(())
    }

    async fn list_applications(&self, filter: &ApplicationFilter) -> Result<Vec<Application>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM postulaciones WHERE 1 = 1",
            APPLICATION_COLUMNS
        ));
        if let Some(candidato_id) = filter.candidato_id {
            builder.push(" AND candidato_id = ");
            builder.push_bind(candidato_id);
        }
        if let Some(puesto_id) = filter.puesto_id {
            builder.push(" AND puesto_id = ");
            builder.push_bind(puesto_id);
        }
        if let Some(estado) = filter.estado {
            builder.push(" AND estado = ");
            builder.push_bind(estado.as_str());
        }
        builder.push(" ORDER BY fecha_postulacion ASC, id ASC");

        let rows: Vec<ApplicationRow> = builder.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(Application::try_from).collect()
    }

    async fn insert_position(&self, position: &Position) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO puestos
                (id, empresa_id, titulo, descripcion, ubicacion, salario_min, salario_max,
                 moneda, tipo_contrato, fecha_publicacion, fecha_cierre, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(position.id)
        .bind(position.empresa_id)
        .bind(&position.titulo)
        .bind(&position.descripcion)
        .bind(&position.ubicacion)
        .bind(position.salario_min)
        .bind(position.salario_max)
        .bind(&position.moneda)
        .bind(position.tipo_contrato.as_str())
        .bind(position.fecha_publicacion)
        .bind(position.fecha_cierre)
        .bind(position.estado.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_position(&self, id: Uuid) -> Result<Option<Position>> {
        let row = sqlx::query_as::<_, PositionRow>(&format!(
            "SELECT {} FROM puestos WHERE id = $1",
            POSITION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Position::try_from).transpose()
    }

    async fn update_position(&self, position: &Position) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE puestos
            SET titulo = $2, descripcion = $3, ubicacion = $4, salario_min = $5,
                salario_max = $6, moneda = $7, tipo_contrato = $8, fecha_cierre = $9,
                estado = $10
            WHERE id = $1
            "#,
        )
        .bind(position.id)
        .bind(&position.titulo)
        .bind(&position.descripcion)
        .bind(&position.ubicacion)
        .bind(position.salario_min)
        .bind(position.salario_max)
        .bind(&position.moneda)
        .bind(position.tipo_contrato.as_str())
        .bind(position.fecha_cierre)
        .bind(position.estado.as_str())
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "Puesto con ID {} no encontrado",
                position.id
            )));
        }
        Ok(())
    }

    async fn list_positions(&self, filter: &PositionFilter) -> Result<Vec<Position>> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {} FROM puestos WHERE 1 = 1",
            POSITION_COLUMNS
        ));
        if let Some(empresa_id) = filter.empresa_id {
            builder.push(" AND empresa_id = ");
            builder.push_bind(empresa_id);
        }
        if let Some(estado) = filter.estado {
            builder.push(" AND estado = ");
            builder.push_bind(estado.as_str());
        }
        builder.push(" ORDER BY fecha_publicacion DESC");

        let rows: Vec<PositionRow> = builder.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(Position::try_from).collect()
    }

    async fn positions_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Position>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, PositionRow>(&format!(
            "SELECT {} FROM puestos WHERE id = ANY($1)",
            POSITION_COLUMNS
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| Position::try_from(row).map(|p| (p.id, p)))
            .collect()
    }

    async fn accounts_by_ids(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Account>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, rol, nombre_completo, email, carrera, telefono, ciudad, estado
            FROM cuentas
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter()
            .map(|row| Account::try_from(row).map(|a| (a.id, a)))
            .collect()
    }

    async fn insert_feedback(&self, feedback: &Feedback) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contactos
                (id, postulacion_id, empresa_id, perfil_id, tipo_feedback,
                 mensaje_texto, motivo_rechazo, fecha_envio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(feedback.id)
        .bind(feedback.postulacion_id)
        .bind(feedback.empresa_id)
        .bind(feedback.perfil_id)
        .bind(feedback.tipo_feedback.as_str())
        .bind(&feedback.mensaje_texto)
        .bind(&feedback.motivo_rechazo)
        .bind(feedback.fecha_envio)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
