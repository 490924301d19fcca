pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    middleware::from_fn,
    routing::{get, patch, post},
    Router,
};

use crate::models::application::TransitionPolicy;
use crate::services::{
    achievement_service::AchievementService, application_service::ApplicationService,
    enrichment_service::EnrichmentService, feedback_service::FeedbackService,
    metrics_service::MetricsService, position_service::PositionService,
};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct AppState {
    pub application_service: ApplicationService,
    pub position_service: PositionService,
    pub metrics_service: MetricsService,
    pub achievement_service: AchievementService,
    pub feedback_service: FeedbackService,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self::with_policy(store, TransitionPolicy::default())
    }

    pub fn with_policy(store: Arc<dyn EntityStore>, policy: TransitionPolicy) -> Self {
        let enrichment = EnrichmentService::new(store.clone());
        Self {
            application_service: ApplicationService::with_policy(
                store.clone(),
                enrichment,
                policy,
            ),
            position_service: PositionService::new(store.clone()),
            metrics_service: MetricsService::new(store.clone()),
            achievement_service: AchievementService::new(store.clone()),
            feedback_service: FeedbackService::new(store),
        }
    }
}

/// Full route table. Mutating routes sit behind the bearer-token guard;
/// reads and the health probe stay open.
pub fn build_router(state: AppState) -> Router {
    let auth = || from_fn(middleware::auth::require_bearer_auth);

    let contacto = Router::new()
        .route(
            "/feedback",
            post(routes::contacto::enviar_feedback).layer(auth()),
        )
        .fallback(routes::contacto::deshabilitado);

    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/postulacion/",
            post(routes::postulacion::crear_postulacion)
                .layer(auth())
                .get(routes::postulacion::listar_postulaciones),
        )
        .route(
            "/postulacion/:id",
            get(routes::postulacion::obtener_postulacion),
        )
        .route(
            "/postulacion/:id/estado",
            patch(routes::postulacion::actualizar_estado).layer(auth()),
        )
        .route(
            "/metricas/resumen/:cuenta_id",
            get(routes::metricas::resumen),
        )
        .route("/metricas/logros/:cuenta_id", get(routes::metricas::logros))
        .route(
            "/metricas/recalcular/:cuenta_id",
            get(routes::metricas::recalcular),
        )
        .route(
            "/metricas/contadores/ofertas/:postulante_id",
            get(routes::metricas::contador_ofertas),
        )
        .route(
            "/metricas/contadores/entrevistas/:postulante_id",
            get(routes::metricas::contador_entrevistas),
        )
        .route(
            "/metricas/contadores/rechazos/:postulante_id",
            get(routes::metricas::contador_rechazos),
        )
        .route(
            "/puesto/",
            post(routes::puesto::crear_puesto)
                .layer(auth())
                .get(routes::puesto::listar_puestos),
        )
        .route(
            "/puesto/:id",
            patch(routes::puesto::actualizar_puesto)
                .layer(auth())
                .get(routes::puesto::obtener_puesto),
        )
        .route(
            "/puesto/:id/estado",
            patch(routes::puesto::actualizar_estado_puesto).layer(auth()),
        )
        .nest("/contacto", contacto)
        .with_state(state)
}
