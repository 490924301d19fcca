pub mod contacto;
pub mod health;
pub mod metricas;
pub mod postulacion;
pub mod puesto;
