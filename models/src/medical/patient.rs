// models/src/medical/patient.rs

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::errors::{RecordError, RecordResult, ValidationResult};
use crate::medical::gender::Gender;
use crate::properties::{FromRecord, Record, ToRecord};
use crate::tables::Table;
use crate::validation;

// --- DTO for patient create and full update ---
#[derive(Debug, Clone, Deserialize)]
pub struct PatientRequest {
    pub age: Number,
    pub gender: Value, // 0/1 or "male"/"female"
}

/// Validated columns of a patient row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientFields {
    pub age: i64,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub patient_id: u64,
    pub age: i64,
    pub gender: Gender,
}

impl PatientRequest {
    pub fn validate(&self) -> ValidationResult<PatientFields> {
        Ok(PatientFields {
            age: validation::age(&self.age)?,
            gender: Gender::parse(&self.gender)?,
        })
    }
}

impl ToRecord for PatientFields {
    fn to_record(&self) -> Record {
        Record::new()
            .with("age", self.age)
            .with("gender", self.gender.code())
    }
}

impl FromRecord for Patient {
    fn from_record(record: &Record) -> RecordResult<Self> {
        let code = record.get_i64("gender")?;
        let gender = Gender::from_code(code).ok_or_else(|| {
            RecordError::MalformedRow(format!("gender code {} is neither 0 nor 1", code))
        })?;
        Ok(Patient {
            patient_id: record.get_u64(Table::Patients.key_column())?,
            age: record.get_i64("age")?,
            gender,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use serde_json::json;

    fn request(body: Value) -> PatientRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn label_gender_is_stored_as_code() {
        let fields = request(json!({"age": 45, "gender": "male"})).validate().unwrap();
        let record = fields.to_record();
        assert_eq!(record.get_i64("gender").unwrap(), 1);
        assert_eq!(record.get_i64("age").unwrap(), 45);
    }

    #[test]
    fn out_of_range_age_names_the_field() {
        let err = request(json!({"age": 130, "gender": 0})).validate().unwrap_err();
        assert!(matches!(err, ValidationError::ConstraintViolated { field: "age", .. }));
    }

    #[test]
    fn row_maps_back_with_label() {
        let row = Record::new()
            .with("patient_id", 1i64)
            .with("age", 45i64)
            .with("gender", 1i64);
        let patient = Patient::from_record(&row).unwrap();
        assert_eq!(
            serde_json::to_value(&patient).unwrap(),
            json!({"patient_id": 1, "age": 45, "gender": "male"})
        );
    }

    #[test]
    fn stored_gender_outside_code_set_is_malformed() {
        let row = Record::new()
            .with("patient_id", 1i64)
            .with("age", 45i64)
            .with("gender", 7i64);
        assert!(matches!(Patient::from_record(&row), Err(RecordError::MalformedRow(_))));
    }
}
