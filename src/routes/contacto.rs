use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::contacto_dto::{FeedbackCreate, FeedbackResponse},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn enviar_feedback(
    State(state): State<AppState>,
    Json(payload): Json<FeedbackCreate>,
) -> Result<impl IntoResponse> {
    let feedback = state.feedback_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(feedback))))
}

/// Everything under /contacto except feedback delivery is permanently
/// disabled, not pending.
#[axum::debug_handler]
pub async fn deshabilitado() -> Result<impl IntoResponse> {
    Err::<(), Error>(Error::NotImplemented(
        "Esta función de contacto está deshabilitada permanentemente".to_string(),
    ))
}
