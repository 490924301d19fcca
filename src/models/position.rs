use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoPuesto {
    Abierto,
    Cerrado,
}

impl EstadoPuesto {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPuesto::Abierto => "abierto",
            EstadoPuesto::Cerrado => "cerrado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "abierto" => Some(EstadoPuesto::Abierto),
            "cerrado" => Some(EstadoPuesto::Cerrado),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoContrato {
    TiempoCompleto,
    MedioTiempo,
    Temporal,
    Freelance,
    Practicas,
}

impl TipoContrato {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoContrato::TiempoCompleto => "tiempo_completo",
            TipoContrato::MedioTiempo => "medio_tiempo",
            TipoContrato::Temporal => "temporal",
            TipoContrato::Freelance => "freelance",
            TipoContrato::Practicas => "practicas",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "tiempo_completo" => Some(TipoContrato::TiempoCompleto),
            "medio_tiempo" => Some(TipoContrato::MedioTiempo),
            "temporal" => Some(TipoContrato::Temporal),
            "freelance" => Some(TipoContrato::Freelance),
            "practicas" => Some(TipoContrato::Practicas),
            _ => None,
        }
    }
}

/// Job position owned by a company. Read by the lifecycle controller and
/// the enrichment composer; mutated only through the plain CRUD surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub titulo: String,
    pub descripcion: String,
    pub ubicacion: String,
    pub salario_min: Option<f64>,
    pub salario_max: Option<f64>,
    pub moneda: String,
    pub tipo_contrato: TipoContrato,
    pub fecha_publicacion: DateTime<Utc>,
    pub fecha_cierre: Option<DateTime<Utc>>,
    pub estado: EstadoPuesto,
}

impl Position {
    pub fn is_open(&self) -> bool {
        self.estado == EstadoPuesto::Abierto
    }

    /// Closing stamps `fecha_cierre` exactly once. Returns false when the
    /// position is already closed.
    pub fn cerrar(&mut self) -> bool {
        if self.estado == EstadoPuesto::Cerrado {
            return false;
        }
        self.estado = EstadoPuesto::Cerrado;
        self.fecha_cierre = Some(Utc::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Position {
        Position {
            id: Uuid::new_v4(),
            empresa_id: Uuid::new_v4(),
            titulo: "Backend Developer".into(),
            descripcion: "Rust services".into(),
            ubicacion: "CDMX".into(),
            salario_min: Some(20000.0),
            salario_max: Some(30000.0),
            moneda: "MXN".into(),
            tipo_contrato: TipoContrato::TiempoCompleto,
            fecha_publicacion: Utc::now(),
            fecha_cierre: None,
            estado: EstadoPuesto::Abierto,
        }
    }

    #[test]
    fn cerrar_sets_fecha_cierre_once() {
        let mut position = sample();
        assert!(position.cerrar());
        let first = position.fecha_cierre.unwrap();
        assert!(!position.cerrar());
        assert_eq!(position.fecha_cierre.unwrap(), first);
    }
}
