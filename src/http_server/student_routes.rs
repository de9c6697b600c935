//! Student HTTP Routes
//!
//! - `GET  /students[?format=json]`
//! - `POST /students`
//! - `GET  /students/:id`
//! - `GET  /students/me`
//! - `GET  /students/search?query=...`

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Form, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{debug, error, warn};

use crate::auth::{AuthError, Authenticator, JwtManager};
use crate::students::{
    detail_path, InMemoryStudentRepository, ListMode, MeTarget, SearchResults, StudentList,
    StudentRecord, StudentResult, StudentService,
};

use super::config::HttpServerConfig;
use super::render::render_student_list;

const ME_PATH: &str = "/students/me";

// ==================
// Shared State
// ==================

/// Roster state shared across handlers
pub struct StudentsState {
    pub service: StudentService<InMemoryStudentRepository>,
    pub auth: Authenticator,
    pub login_url: String,
}

impl StudentsState {
    /// Empty Store, identity and login settings from `config`
    pub fn from_config(config: &HttpServerConfig) -> Self {
        Self::with_repository(config, InMemoryStudentRepository::new())
    }

    pub fn with_repository(config: &HttpServerConfig, repository: InMemoryStudentRepository) -> Self {
        Self {
            service: StudentService::new(repository),
            auth: Authenticator::new(
                JwtManager::new(config.auth.jwt_config()),
                config.auth.cookie_name.clone(),
            ),
            login_url: config.login_url.clone(),
        }
    }

    /// Redirect target for callers without an identity
    pub fn login_location(&self) -> String {
        format!("{}?next={}", self.login_url, ME_PATH)
    }
}

/// Query parameters; a repeated key keeps its last value.
type QueryParams = HashMap<String, String>;

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/students", get(list_handler).post(create_handler))
        .route("/students/me", get(me_handler))
        .route("/students/search", get(search_handler))
        .route("/students/:id", get(detail_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List students as HTML (active only) or JSON (all)
async fn list_handler(
    State(state): State<Arc<StudentsState>>,
    Query(params): Query<QueryParams>,
) -> StudentResult<Response> {
    let mode = ListMode::from_format(params.get("format").map(String::as_str));
    let students = state.service.list(mode)?;

    Ok(match mode {
        ListMode::Html => Html(render_student_list(&students)).into_response(),
        ListMode::Json => Json(StudentList { students }).into_response(),
    })
}

/// Create a student from form fields
///
/// An unreadable body is treated as an empty form so it fails the same
/// way as a payload with missing fields.
async fn create_handler(
    State(state): State<Arc<StudentsState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> StudentResult<StatusCode> {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            debug!(%rejection, "unreadable student form");
            HashMap::new()
        }
    };

    state.service.create(&fields)?;
    Ok(StatusCode::CREATED)
}

/// Get a single student by id
async fn detail_handler(
    State(state): State<Arc<StudentsState>>,
    Path(id): Path<String>,
) -> StudentResult<Json<StudentRecord>> {
    state.service.detail(&id).map(Json)
}

/// Redirect to the caller's own detail page
async fn me_handler(State(state): State<Arc<StudentsState>>, headers: HeaderMap) -> Response {
    let identity = match state.auth.authenticate(&headers) {
        Ok(id) => Some(id),
        Err(AuthError::AuthenticationRequired) => None,
        Err(e) if e.is_client_error() => {
            warn!(error = %e, "rejected identity token");
            None
        }
        Err(e) => {
            error!(error = %e, "identity check failed");
            None
        }
    };

    let location = match MeTarget::resolve(identity) {
        MeTarget::Detail(id) => {
            debug!(id, "me redirect");
            detail_path(id)
        }
        MeTarget::Login => {
            debug!("me redirect to login");
            state.login_location()
        }
    };

    found(&location)
}

/// Case-insensitive name search
async fn search_handler(
    State(state): State<Arc<StudentsState>>,
    Query(params): Query<QueryParams>,
) -> StudentResult<Json<SearchResults>> {
    state
        .service
        .search(params.get("query").map(String::as_str))
        .map(Json)
}

/// 302 with a Location header.
///
/// `axum::response::Redirect` only offers 303/307/308.
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
