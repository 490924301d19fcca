use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status lifecycle of an application. Exactly six wire values; anything
/// else is rejected at the boundary with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoPostulacion {
    Pendiente,
    EnRevision,
    Entrevista,
    Rechazado,
    Aceptado,
    Oferta,
}

impl EstadoPostulacion {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPostulacion::Pendiente => "pendiente",
            EstadoPostulacion::EnRevision => "en_revision",
            EstadoPostulacion::Entrevista => "entrevista",
            EstadoPostulacion::Rechazado => "rechazado",
            EstadoPostulacion::Aceptado => "aceptado",
            EstadoPostulacion::Oferta => "oferta",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pendiente" => Some(EstadoPostulacion::Pendiente),
            "en_revision" => Some(EstadoPostulacion::EnRevision),
            "entrevista" => Some(EstadoPostulacion::Entrevista),
            "rechazado" => Some(EstadoPostulacion::Rechazado),
            "aceptado" => Some(EstadoPostulacion::Aceptado),
            "oferta" => Some(EstadoPostulacion::Oferta),
            _ => None,
        }
    }

    /// Terminal states accept no further transitions under the strict policy.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EstadoPostulacion::Rechazado | EstadoPostulacion::Aceptado | EstadoPostulacion::Oferta
        )
    }
}

impl std::fmt::Display for EstadoPostulacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transition validation injected into the lifecycle controller.
///
/// `Lenient` matches the documented wire behavior: any enum member is an
/// acceptable target regardless of the current state. `Strict` enforces
/// the forward-only table (pendiente -> en_revision -> entrevista ->
/// terminal), rejecting backward jumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    #[default]
    Lenient,
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: EstadoPostulacion, to: EstadoPostulacion) -> bool {
        match self {
            TransitionPolicy::Lenient => true,
            TransitionPolicy::Strict => match from {
                EstadoPostulacion::Pendiente => to == EstadoPostulacion::EnRevision,
                EstadoPostulacion::EnRevision => matches!(
                    to,
                    EstadoPostulacion::Entrevista
                        | EstadoPostulacion::Rechazado
                        | EstadoPostulacion::Aceptado
                        | EstadoPostulacion::Oferta
                ),
                EstadoPostulacion::Entrevista => matches!(
                    to,
                    EstadoPostulacion::Rechazado
                        | EstadoPostulacion::Aceptado
                        | EstadoPostulacion::Oferta
                ),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Documento {
    pub nombre: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hito {
    pub hito_id: Uuid,
    pub fecha: DateTime<Utc>,
    pub descripcion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub candidato_id: Uuid,
    pub puesto_id: Uuid,
    pub fecha_postulacion: DateTime<Utc>,
    pub estado: EstadoPostulacion,
    pub documentos_adjuntos: Vec<Documento>,
    pub hitos: Vec<Hito>,
}

impl Application {
    pub fn new(candidato_id: Uuid, puesto_id: Uuid, documentos: Vec<Documento>) -> Self {
        Self {
            id: Uuid::new_v4(),
            candidato_id,
            puesto_id,
            fecha_postulacion: Utc::now(),
            estado: EstadoPostulacion::Pendiente,
            documentos_adjuntos: documentos,
            hitos: Vec::new(),
        }
    }

    /// Appends a milestone. Timestamps are clamped so the sequence stays
    /// non-decreasing even across clock adjustments.
    pub fn registrar_hito(&mut self, descripcion: String) {
        let now = Utc::now();
        let fecha = match self.hitos.last() {
            Some(last) if last.fecha > now => last.fecha,
            _ => now,
        };
        self.hitos.push(Hito {
            hito_id: Uuid::new_v4(),
            fecha,
            descripcion,
        });
    }

    pub fn cambiar_estado(&mut self, nuevo_estado: EstadoPostulacion) {
        let anterior = self.estado;
        self.estado = nuevo_estado;
        self.registrar_hito(format!(
            "Estado actualizado de {} a {}",
            anterior, nuevo_estado
        ));
    }

    /// Timestamp of the most recent activity on this application, used to
    /// date threshold crossings retroactively.
    pub fn fecha_actividad(&self) -> DateTime<Utc> {
        self.hitos
            .last()
            .map(|h| h.fecha)
            .unwrap_or(self.fecha_postulacion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_six_states() {
        for value in [
            "pendiente",
            "en_revision",
            "entrevista",
            "rechazado",
            "aceptado",
            "oferta",
        ] {
            let estado = EstadoPostulacion::parse(value).unwrap();
            assert_eq!(estado.as_str(), value);
        }
        assert!(EstadoPostulacion::parse("rechazo").is_none());
        assert!(EstadoPostulacion::parse("PENDIENTE").is_none());
    }

    #[test]
    fn strict_policy_follows_the_table() {
        let policy = TransitionPolicy::Strict;
        assert!(policy.allows(EstadoPostulacion::Pendiente, EstadoPostulacion::EnRevision));
        assert!(!policy.allows(EstadoPostulacion::Pendiente, EstadoPostulacion::Entrevista));
        assert!(policy.allows(EstadoPostulacion::EnRevision, EstadoPostulacion::Entrevista));
        assert!(policy.allows(EstadoPostulacion::EnRevision, EstadoPostulacion::Oferta));
        assert!(policy.allows(EstadoPostulacion::Entrevista, EstadoPostulacion::Aceptado));
        // backward jumps rejected
        assert!(!policy.allows(EstadoPostulacion::Entrevista, EstadoPostulacion::Pendiente));
        assert!(!policy.allows(EstadoPostulacion::Aceptado, EstadoPostulacion::Pendiente));
        // terminal states accept nothing
        assert!(!policy.allows(EstadoPostulacion::Oferta, EstadoPostulacion::Entrevista));
        assert!(!policy.allows(EstadoPostulacion::Rechazado, EstadoPostulacion::EnRevision));
    }

    #[test]
    fn lenient_policy_accepts_any_member() {
        let policy = TransitionPolicy::Lenient;
        assert!(policy.allows(EstadoPostulacion::Pendiente, EstadoPostulacion::Entrevista));
        assert!(policy.allows(EstadoPostulacion::Aceptado, EstadoPostulacion::Pendiente));
    }

    #[test]
    fn cambiar_estado_records_a_milestone() {
        let mut app = Application::new(Uuid::new_v4(), Uuid::new_v4(), Vec::new());
        assert!(app.hitos.is_empty());

        app.cambiar_estado(EstadoPostulacion::Entrevista);
        assert_eq!(app.estado, EstadoPostulacion::Entrevista);
        assert_eq!(app.hitos.len(), 1);
        assert_eq!(
            app.hitos[0].descripcion,
            "Estado actualizado de pendiente a entrevista"
        );
    }

    #[test]
    fn hitos_are_non_decreasing() {
        let mut app = Application::new(Uuid::new_v4(), Uuid::new_v4(), Vec::new());
        app.registrar_hito("uno".into());
        app.registrar_hito("dos".into());
        app.registrar_hito("tres".into());
        for pair in app.hitos.windows(2) {
            assert!(pair[0].fecha <= pair[1].fecha);
        }
    }
}
