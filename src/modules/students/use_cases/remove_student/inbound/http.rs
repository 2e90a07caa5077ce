use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::students::core::decider::remove_student::command::RemoveStudent;
use crate::modules::students::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveStudentBody {
    pub name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RemoveStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .remove_handler
        .handle(RemoveStudent::new(body.name))
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::NOT_FOUND.into_response(),
    }
}
