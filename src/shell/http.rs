use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::students::use_cases::add_student::inbound::http as add_http;
use crate::modules::students::use_cases::has_student::inbound::http as has_http;
use crate::modules::students::use_cases::remove_student::inbound::http as remove_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/add-student", post(add_http::handle))
        .route("/remove-student", post(remove_http::handle))
        .route("/has-student", get(has_http::handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
