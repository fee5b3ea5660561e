// rest_api/src/handlers/diagnosis.rs

use axum::{extract::State, Json};
use log::info;
use serde_json::Value;

use models::medical::{Diagnosis, DiagnosisRequest};
use models::{Table, ToRecord};

use crate::{AppJson, AppPath, AppState, RestApiError};

pub async fn create_diagnosis(
    State(state): State<AppState>,
    AppJson(payload): AppJson<DiagnosisRequest>,
) -> Result<Json<Diagnosis>, RestApiError> {
    let fields = payload.validate()?;
    state.db.require(Table::Patients, fields.patient_id).await?;
    let diagnosis: Diagnosis = state.db.create(Table::Diagnosis, &fields).await?;
    info!("Created diagnosis {} for patient {}", diagnosis.diagnosis_id, diagnosis.patient_id);
    Ok(Json(diagnosis))
}

pub async fn list_diagnoses(State(state): State<AppState>) -> Result<Json<Vec<Diagnosis>>, RestApiError> {
    Ok(Json(state.db.list(Table::Diagnosis).await?))
}

pub async fn get_diagnosis(
    State(state): State<AppState>,
    AppPath(diagnosis_id): AppPath<u64>,
) -> Result<Json<Diagnosis>, RestApiError> {
    Ok(Json(state.db.get(Table::Diagnosis, diagnosis_id).await?))
}

pub async fn update_diagnosis(
    State(state): State<AppState>,
    AppPath(diagnosis_id): AppPath<u64>,
    AppJson(payload): AppJson<DiagnosisRequest>,
) -> Result<Json<Diagnosis>, RestApiError> {
    let fields = payload.validate()?;
    state.db.require(Table::Patients, fields.patient_id).await?;
    let diagnosis: Diagnosis = state
        .db
        .update(Table::Diagnosis, diagnosis_id, fields.to_record())
        .await?;
    info!("Updated diagnosis {}", diagnosis_id);
    Ok(Json(diagnosis))
}

pub async fn delete_diagnosis(
    State(state): State<AppState>,
    AppPath(diagnosis_id): AppPath<u64>,
) -> Result<Json<Value>, RestApiError> {
    state.db.delete(Table::Diagnosis, diagnosis_id).await?;
    info!("Deleted diagnosis {}", diagnosis_id);
    Ok(super::deleted("Diagnosis"))
}
