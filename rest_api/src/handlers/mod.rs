// rest_api/src/handlers/mod.rs

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub mod diagnosis;
pub mod medical_tests;
pub mod patients;

pub const WELCOME_MESSAGE: &str = "Welcome to the Liver Disease Prediction API";

// Handler for the / endpoint
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

// Handler for the /health endpoint
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "engine": state.db.get_type() }))
}

pub(crate) fn deleted(entity: &str) -> Json<Value> {
    Json(json!({ "message": format!("{} deleted successfully", entity) }))
}
