use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct HasStudentParams {
    pub name: String,
}

#[derive(Serialize)]
pub struct HasStudentResponse {
    pub name: String,
    pub enrolled: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HasStudentParams>,
) -> impl IntoResponse {
    let enrolled = state.has_handler.handle(&params.name).await;
    Json(HasStudentResponse {
        name: params.name,
        enrolled,
    })
}
