//! HTTP API Tests
//!
//! Drives the full router in-process:
//! - Listing in HTML (active only) and JSON (everything)
//! - Create with validation and fixed rejection body
//! - Detail lookup and 404
//! - `/students/me` redirects
//! - Case-insensitive search
//! - `/status`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use students_crud::http_server::{build_router, HttpServerConfig, StudentsState};
use students_crud::students::{InMemoryStudentRepository, StudentRecord, StudentRepository};

// =============================================================================
// Helper Functions
// =============================================================================

fn fixture() -> Vec<StudentRecord> {
    vec![
        StudentRecord::new(10, "John Snow", "1980-01-01", 36, true),
        StudentRecord::new(23, "Daenerys Targaryen", "1986-01-01", 30, true),
        StudentRecord::new(4, "Arya Stark", "1996-01-01", 20, false),
    ]
}

fn setup() -> (Router, Arc<StudentsState>) {
    let config = HttpServerConfig::default();
    let state = Arc::new(StudentsState::with_repository(
        &config,
        InMemoryStudentRepository::with_records(fixture()),
    ));
    (build_router(&config, state.clone()), state)
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn get(router: &Router, uri: &str) -> Response {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_form(router: &Router, uri: &str, form: &str) -> Response {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(router, request).await
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_students_list_html() {
    let (router, _) = setup();

    let response = get(&router, "/students").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html; charset=utf-8");

    let content = body_text(response).await;
    assert!(content.contains("<li>Daenerys Targaryen (30)</li>"));
    assert!(content.contains("<li>John Snow (36)</li>"));
    assert!(!content.contains("Arya Stark"));
}

#[tokio::test]
async fn test_students_list_json_includes_inactive() {
    let (router, _) = setup();

    let response = get(&router, "/students?format=json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let expected = json!({
        "students": [
            {"id": 10, "birth_date": "1980-01-01", "active": true, "age": 36, "name": "John Snow"},
            {"id": 23, "birth_date": "1986-01-01", "active": true, "age": 30, "name": "Daenerys Targaryen"},
            {"id": 4, "birth_date": "1996-01-01", "active": false, "age": 20, "name": "Arya Stark"}
        ]
    });
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn test_unknown_format_falls_back_to_html() {
    let (router, _) = setup();

    let response = get(&router, "/students?format=xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
}

#[tokio::test]
async fn test_repeated_format_param_last_wins() {
    let (router, _) = setup();

    let response = get(&router, "/students?format=json&format=json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_json(response).await["students"].as_array().unwrap().len(), 3);

    let response = get(&router, "/students?format=xml&format=json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let response = get(&router, "/students?format=json&format=xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_students_create() {
    let (router, state) = setup();

    let response = post_form(
        &router,
        "/students",
        "id=40&birth_date=1995-01-01&active=True&age=21&name=Joffrey+Baratheon",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_text(response).await.is_empty());

    let response = get(&router, "/students?format=json").await;
    let students = body_json(response).await["students"].clone();
    assert_eq!(students.as_array().unwrap().len(), 4);
    assert_eq!(
        students[3],
        json!({
            "active": true,
            "birth_date": "1995-01-01",
            "age": 21,
            "name": "Joffrey Baratheon",
            "id": 40
        })
    );
    assert_eq!(state.service.repository().len().unwrap(), 4);
}

#[tokio::test]
async fn test_students_create_missing_required_fields() {
    let (router, state) = setup();

    let response = post_form(&router, "/students", "foo=bar").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "POSTed student data is incomplete or invalid"
    );
    assert_eq!(state.service.repository().all().unwrap(), fixture());
}

#[tokio::test]
async fn test_students_create_invalid_field_types() {
    let (router, state) = setup();

    let response = post_form(
        &router,
        "/students",
        "id=foobar&birth_date=123&active=something&age=True&name=",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "POSTed student data is incomplete or invalid"
    );
    assert_eq!(state.service.repository().len().unwrap(), 3);
}

#[tokio::test]
async fn test_students_create_without_form_body() {
    let (router, state) = setup();

    let request = Request::post("/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"id": 40}"#))
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.service.repository().len().unwrap(), 3);
}

#[tokio::test]
async fn test_created_false_literal_is_still_active() {
    let (router, _) = setup();

    let response = post_form(
        &router,
        "/students",
        "id=41&birth_date=1990-01-01&active=false&age=26&name=Sansa+Stark",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let content = body_text(get(&router, "/students").await).await;
    assert!(content.contains("<li>Sansa Stark (26)</li>"));
}

#[tokio::test]
async fn test_duplicate_id_accepted_first_match_wins() {
    let (router, state) = setup();

    let response = post_form(
        &router,
        "/students",
        "id=10&birth_date=1970-01-01&active=True&age=46&name=Ned+Stark",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(state.service.repository().len().unwrap(), 4);

    let detail = body_json(get(&router, "/students/10").await).await;
    assert_eq!(detail["name"], "John Snow");
}

// =============================================================================
// Detail
// =============================================================================

#[tokio::test]
async fn test_students_detail() {
    let (router, _) = setup();

    let response = get(&router, "/students/10").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 10,
            "name": "John Snow",
            "birth_date": "1980-01-01",
            "active": true,
            "age": 36
        })
    );
}

#[tokio::test]
async fn test_students_detail_not_found() {
    let (router, _) = setup();

    let response = get(&router, "/students/10000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&router, "/students/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_students_detail_requires_plain_integer() {
    let (router, _) = setup();

    for uri in ["/students/+10", "/students/%2010", "/students/10%20", "/students/010x"] {
        let response = get(&router, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_students_detail_rejects_post() {
    let (router, _) = setup();

    let response = post_form(&router, "/students/10", "name=x").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Me
// =============================================================================

#[tokio::test]
async fn test_students_me_not_authenticated() {
    let (router, _) = setup();

    let response = get(&router, "/students/me").await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/accounts/login/?next=/students/me");
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_students_me_bad_token_redirects_to_login() {
    let (router, _) = setup();

    let request = Request::get("/students/me")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(location(&response).starts_with("/accounts/login/"));
}

#[tokio::test]
async fn test_students_me_lowercase_bearer_scheme() {
    let (router, state) = setup();
    let token = state.auth.jwt().issue(4).unwrap();

    let request = Request::get("/students/me")
        .header(header::AUTHORIZATION, format!("bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/students/4");
}

#[tokio::test]
async fn test_students_me() {
    let (router, state) = setup();
    let token = state.auth.jwt().issue(10).unwrap();

    let request = Request::get("/students/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let target = location(&response);
    assert_eq!(target, "/students/10");

    let response = get(&router, &target).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": 10,
            "age": 36,
            "birth_date": "1980-01-01",
            "active": true,
            "name": "John Snow"
        })
    );
}

#[tokio::test]
async fn test_students_me_via_cookie() {
    let (router, state) = setup();
    let token = state.auth.jwt().issue(23).unwrap();

    let request = Request::get("/students/me")
        .header(header::COOKIE, format!("session={}", token))
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/students/23");
}

#[tokio::test]
async fn test_students_me_post() {
    let (router, state) = setup();
    let token = state.auth.jwt().issue(10).unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/students/me")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = send(&router, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_student_search_missing_query_param() {
    let (router, _) = setup();

    let response = get(&router, "/students/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "\"query\" param must be provided");

    let response = get(&router, "/students/search?query=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_student_search() {
    let (router, _) = setup();

    let response = get(&router, "/students/search?query=snow").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "results": [
                {"birth_date": "1980-01-01", "active": true, "age": 36, "id": 10, "name": "John Snow"}
            ]
        })
    );
}

#[tokio::test]
async fn test_student_search_case_insensitive() {
    let (router, _) = setup();

    let lower = body_json(get(&router, "/students/search?query=snow").await).await;
    let mixed = body_json(get(&router, "/students/search?query=sNoW").await).await;
    assert_eq!(lower, mixed);
}

#[tokio::test]
async fn test_student_search_multiple_match() {
    let (router, _) = setup();

    let response = get(&router, "/students/search?query=ar").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "results": [
                {"birth_date": "1986-01-01", "active": true, "age": 30, "id": 23, "name": "Daenerys Targaryen"},
                {"birth_date": "1996-01-01", "active": false, "age": 20, "id": 4, "name": "Arya Stark"}
            ]
        })
    );
}

#[tokio::test]
async fn test_student_search_no_match() {
    let (router, _) = setup();

    let response = get(&router, "/students/search?query=lannister").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"results": []}));
}

#[tokio::test]
async fn test_student_search_repeated_query_last_wins() {
    let (router, _) = setup();

    let response = get(&router, "/students/search?query=stark&query=snow").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let names: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John Snow"]);
}

// =============================================================================
// Status
// =============================================================================

#[tokio::test]
async fn test_status_view() {
    let (router, _) = setup();

    let response = get(&router, "/status").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "OK"}));
}
