// rest_api/src/lib.rs

use std::future::Future;

use anyhow::Context;
use axum::{
    async_trait,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{Method, StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use lib::Database;
use models::errors::{RecordError, ValidationError};

pub mod config;
pub mod handlers;

use crate::config::RestApiConfig;

// Define the REST API error enum
#[derive(Debug, Error)]
pub enum RestApiError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<ValidationError> for RestApiError {
    fn from(err: ValidationError) -> Self {
        RestApiError::Record(RecordError::Validation(err))
    }
}

impl From<JsonRejection> for RestApiError {
    fn from(rejection: JsonRejection) -> Self {
        RestApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for RestApiError {
    fn from(rejection: PathRejection) -> Self {
        RestApiError::InvalidInput(rejection.body_text())
    }
}

// Implement IntoResponse for RestApiError to convert it into an HTTP response
impl IntoResponse for RestApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            RestApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            RestApiError::Record(err @ RecordError::Validation(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
            RestApiError::Record(err @ RecordError::NotFound { .. }) => (StatusCode::NOT_FOUND, err.to_string()),
            RestApiError::Record(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "status": "error",
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejections (bad syntax, wrong types, missing
/// fields) become 400 responses in the API's error shape.
#[derive(Debug, Clone)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = RestApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

/// `Path` extractor that reports unparsable ids in the API's error shape.
#[derive(Debug, Clone)]
pub struct AppPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = RestApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(AppPath(value))
    }
}

// Shared state for the Axum application
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the router: every (method, path) the API serves, bound to its
/// handler, with CORS applied.
pub fn app(state: AppState) -> Router {
    use handlers::{diagnosis, medical_tests, patients};

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/health", get(handlers::health_handler))
        .route("/patients/", get(patients::list_patients).post(patients::create_patient))
        .route("/patients", get(patients::list_patients).post(patients::create_patient))
        .route(
            "/patients/:patient_id",
            get(patients::get_patient)
                .put(patients::update_patient)
                .delete(patients::delete_patient),
        )
        .route("/medical_tests/", get(medical_tests::list_medical_tests).post(medical_tests::create_medical_test))
        .route("/medical_tests", get(medical_tests::list_medical_tests).post(medical_tests::create_medical_test))
        .route(
            "/medical_tests/:test_id",
            get(medical_tests::get_medical_test)
                .put(medical_tests::update_medical_test)
                .delete(medical_tests::delete_medical_test),
        )
        .route("/diagnosis/", get(diagnosis::list_diagnoses).post(diagnosis::create_diagnosis))
        .route("/diagnosis", get(diagnosis::list_diagnoses).post(diagnosis::create_diagnosis))
        .route(
            "/diagnosis/:diagnosis_id",
            get(diagnosis::get_diagnosis)
                .put(diagnosis::update_diagnosis)
                .delete(diagnosis::delete_diagnosis),
        )
        .with_state(state)
        .layer(cors)
}

// Main function to start the REST API server
pub async fn start_server<F>(config: RestApiConfig, db: Database, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address: {}", addr))?;
    info!("REST API server listening on {} ({} store)", addr, db.get_type());

    axum::serve(listener, app(AppState::new(db)).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST API server failed to start or run")?;

    info!("REST API server stopped.");
    Ok(())
}
