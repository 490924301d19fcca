pub mod achievement_service;
pub mod application_service;
pub mod enrichment_service;
pub mod feedback_service;
pub mod metrics_service;
pub mod position_service;
