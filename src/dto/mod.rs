pub mod contacto_dto;
pub mod metrica_dto;
pub mod postulacion_dto;
pub mod puesto_dto;
