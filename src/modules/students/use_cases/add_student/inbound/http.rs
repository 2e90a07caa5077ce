use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::students::core::decider::add_student::command::AddStudent;
use crate::modules::students::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddStudentBody {
    pub name: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddStudentBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.add_handler.handle(AddStudent::new(body.name)).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
    }
}
