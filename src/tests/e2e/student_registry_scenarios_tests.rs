// End to end scenarios over the assembled HTTP router, each against a fresh roster.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::students::adapters::outbound::roster_in_memory::InMemoryStudentRoster;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::names::{EUICHAN, PARKPARK, STILLER, UNDAV};

#[fixture]
fn app() -> Router {
    router(AppState::new(Arc::new(InMemoryStudentRoster::new())))
}

async fn post_name(app: &Router, path: &str, name: &str) -> StatusCode {
    let body = serde_json::json!({ "name": name }).to_string();
    app.clone()
        .oneshot(
            Request::post(path)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
}

async fn has_student(app: &Router, name: &str) -> bool {
    let query = serde_urlencoded::to_string([("name", name)]).unwrap();
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/has-student?{query}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["name"], name);
    json["enrolled"].as_bool().unwrap()
}

#[rstest]
#[tokio::test]
async fn added_student_is_enrolled(app: Router) {
    assert_eq!(post_name(&app, "/add-student", STILLER).await, StatusCode::CREATED);
    assert!(has_student(&app, STILLER).await);
}

#[rstest]
#[tokio::test]
async fn adding_the_same_student_twice_conflicts(app: Router) {
    assert_eq!(post_name(&app, "/add-student", UNDAV).await, StatusCode::CREATED);
    assert_eq!(post_name(&app, "/add-student", UNDAV).await, StatusCode::CONFLICT);
    assert!(has_student(&app, UNDAV).await);
}

#[rstest]
#[tokio::test]
async fn removing_a_never_added_student_is_not_found(app: Router) {
    assert_eq!(
        post_name(&app, "/remove-student", UNDAV).await,
        StatusCode::NOT_FOUND
    );
    assert!(!has_student(&app, UNDAV).await);
}

#[rstest]
#[tokio::test]
async fn removed_student_is_no_longer_enrolled(app: Router) {
    assert_eq!(post_name(&app, "/add-student", EUICHAN).await, StatusCode::CREATED);
    assert_eq!(
        post_name(&app, "/remove-student", EUICHAN).await,
        StatusCode::NO_CONTENT
    );
    assert!(!has_student(&app, EUICHAN).await);
}

#[rstest]
#[tokio::test]
async fn removing_a_student_twice_is_not_found(app: Router) {
    assert_eq!(post_name(&app, "/add-student", PARKPARK).await, StatusCode::CREATED);
    assert_eq!(
        post_name(&app, "/remove-student", PARKPARK).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        post_name(&app, "/remove-student", PARKPARK).await,
        StatusCode::NOT_FOUND
    );
}
