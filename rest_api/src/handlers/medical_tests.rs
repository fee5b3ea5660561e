// rest_api/src/handlers/medical_tests.rs

use axum::{extract::State, Json};
use log::info;
use serde_json::Value;

use models::medical::{MedicalTest, MedicalTestPatch, NewMedicalTest};
use models::Table;

use crate::{AppJson, AppPath, AppState, RestApiError};

/// Records a test panel for an existing patient.
pub async fn create_medical_test(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewMedicalTest>,
) -> Result<Json<MedicalTest>, RestApiError> {
    let fields = payload.validate()?;
    state.db.require(Table::Patients, fields.patient_id).await?;
    let test: MedicalTest = state.db.create(Table::MedicalTests, &fields).await?;
    info!("Created medical test {} for patient {}", test.test_id, test.patient_id);
    Ok(Json(test))
}

pub async fn list_medical_tests(State(state): State<AppState>) -> Result<Json<Vec<MedicalTest>>, RestApiError> {
    Ok(Json(state.db.list(Table::MedicalTests).await?))
}

pub async fn get_medical_test(
    State(state): State<AppState>,
    AppPath(test_id): AppPath<u64>,
) -> Result<Json<MedicalTest>, RestApiError> {
    Ok(Json(state.db.get(Table::MedicalTests, test_id).await?))
}

/// Partial update: only the supplied fields are written, and the response
/// is the row as read back afterwards.
pub async fn update_medical_test(
    State(state): State<AppState>,
    AppPath(test_id): AppPath<u64>,
    AppJson(payload): AppJson<MedicalTestPatch>,
) -> Result<Json<MedicalTest>, RestApiError> {
    let validated = payload.validate()?;
    if let Some(patient_id) = validated.patient_id {
        state.db.require(Table::Patients, patient_id).await?;
    }
    let test: MedicalTest = state
        .db
        .update(Table::MedicalTests, test_id, validated.changes)
        .await?;
    info!("Updated medical test {}", test_id);
    Ok(Json(test))
}

pub async fn delete_medical_test(
    State(state): State<AppState>,
    AppPath(test_id): AppPath<u64>,
) -> Result<Json<Value>, RestApiError> {
    state.db.delete(Table::MedicalTests, test_id).await?;
    info!("Deleted medical test {}", test_id);
    Ok(super::deleted("Medical test"))
}
