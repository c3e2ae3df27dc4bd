use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::recruitment::desk::RecruitmentDesk;
use crate::recruitment::router::{complete_job_handler, recruitment_router};

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn post_contractor_returns_created_view() {
    let router = recruitment_router(RecruitmentDesk::default());

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contractors",
            json!({
                "first_name": "maria",
                "last_name": "silva",
                "start_date": "2025-11-02",
                "hourly_wage": "35.50"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["notice"], "Contractor added!");
    assert_eq!(payload["contractor"]["first_name"], "MARIA");
    assert_eq!(payload["contractor"]["hourly_wage"], "35.50");
    assert_eq!(payload["contractor"]["start_date"], "2025-11-02");
}

#[tokio::test]
async fn post_contractor_reports_validation_message() {
    let router = recruitment_router(RecruitmentDesk::default());

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/contractors",
            json!({
                "first_name": "maria",
                "last_name": "silva",
                "start_date": "someday",
                "hourly_wage": "35.50"
            }),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Please enter a valid date.");
}

#[tokio::test]
async fn list_routes_apply_filters() {
    let (desk, contractor, job) = desk_with_records();
    desk.assign_job(Some(job), Some(contractor))
        .expect("assignment accepted");
    let router = recruitment_router(desk);

    let response = router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/contractors?available=true"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["items"], json!([]));
    assert_eq!(payload["notice"], "No available contractors found.");

    let response = router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/jobs"))
        .await
        .expect("router responds");
    let payload = read_json_body(response).await;
    assert_eq!(payload["items"][0]["assignee"]["name"], "JOHN DOE");
    assert!(payload.get("notice").is_none());

    let response = router
        .oneshot(empty_request(Method::GET, "/api/v1/jobs?unassigned=true"))
        .await
        .expect("router responds");
    let payload = read_json_body(response).await;
    assert_eq!(payload["notice"], "No unassigned jobs found.");
}

#[tokio::test]
async fn cost_filter_route_requires_a_bound() {
    let (desk, _, _) = desk_with_records();
    let router = recruitment_router(desk);

    let response = router
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/jobs/by-cost?min=&max="))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Please enter at least one valid cost.");

    let response = router
        .oneshot(empty_request(Method::GET, "/api/v1/jobs/by-cost?min=100"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["items"][0]["title"], "PAINT");
}

#[tokio::test]
async fn assign_route_maps_conflicts_and_missing_records() {
    let (desk, contractor, job) = desk_with_records();
    let router = recruitment_router(desk);
    let uri = format!("/api/v1/jobs/{}/assign", job.0);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            &uri,
            json!({ "contractor_id": contractor.0 }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["notice"], "Contractor JOHN DOE assigned to job PAINT.");

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            &uri,
            json!({ "contractor_id": contractor.0 }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            &uri,
            json!({ "contractor_id": 99 }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "This job is already assigned.");

    let response = router
        .clone()
        .oneshot(json_request(Method::POST, &uri, json!({})))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = router
        .oneshot(json_request(
            Method::POST,
            "/api/v1/jobs/404/assign",
            json!({ "contractor_id": contractor.0 }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn complete_handler_returns_released_contractor() {
    let (desk, contractor, job) = desk_with_records();
    desk.assign_job(Some(job), Some(contractor))
        .expect("assignment accepted");

    let response = complete_job_handler(State(desk.clone()), Path(job.0))
        .await
        .expect("completion accepted");
    let payload = read_json_body(response).await;
    assert_eq!(payload["job"]["completed"], true);
    assert_eq!(payload["released"]["id"], contractor.0);

    let err = complete_job_handler(State(desk), Path(job.0))
        .await
        .expect_err("repeat completion rejected");
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn delete_route_removes_contractor() {
    let (desk, contractor, _) = desk_with_records();
    let router = recruitment_router(desk.clone());

    let response = router
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/v1/contractors/{}", contractor.0),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(desk.inspect(|system| system.contractor_count()), 0);

    let response = router
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/v1/contractors/{}", contractor.0),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
