// rest_api/src/handlers/patients.rs

use axum::{extract::State, Json};
use log::info;
use serde_json::Value;

use models::medical::{Patient, PatientRequest};
use models::{Table, ToRecord};

use crate::{AppJson, AppPath, AppState, RestApiError};

pub async fn create_patient(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PatientRequest>,
) -> Result<Json<Patient>, RestApiError> {
    let fields = payload.validate()?;
    let patient: Patient = state.db.create(Table::Patients, &fields).await?;
    info!("Created patient {}", patient.patient_id);
    Ok(Json(patient))
}

pub async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, RestApiError> {
    Ok(Json(state.db.list(Table::Patients).await?))
}

pub async fn get_patient(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u64>,
) -> Result<Json<Patient>, RestApiError> {
    Ok(Json(state.db.get(Table::Patients, patient_id).await?))
}

// Full replacement of age and gender.
pub async fn update_patient(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u64>,
    AppJson(payload): AppJson<PatientRequest>,
) -> Result<Json<Patient>, RestApiError> {
    let fields = payload.validate()?;
    let patient: Patient = state
        .db
        .update(Table::Patients, patient_id, fields.to_record())
        .await?;
    info!("Updated patient {}", patient_id);
    Ok(Json(patient))
}

pub async fn delete_patient(
    State(state): State<AppState>,
    AppPath(patient_id): AppPath<u64>,
) -> Result<Json<Value>, RestApiError> {
    state.db.delete(Table::Patients, patient_id).await?;
    info!("Deleted patient {}", patient_id);
    Ok(super::deleted("Patient"))
}
