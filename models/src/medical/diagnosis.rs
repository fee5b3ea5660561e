// models/src/medical/diagnosis.rs

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::{RecordResult, ValidationResult};
use crate::properties::{FromRecord, Record, ToRecord};
use crate::tables::Table;
use crate::validation;

// --- DTO for diagnosis create and full update ---
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosisRequest {
    pub patient_id: Number,
    pub diagnosis: Number, // 1 = liver disease present, 0 = absent
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosisFields {
    pub patient_id: u64,
    pub diagnosis: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub diagnosis_id: u64,
    pub patient_id: u64,
    pub diagnosis: i64,
}

impl DiagnosisRequest {
    pub fn validate(&self) -> ValidationResult<DiagnosisFields> {
        Ok(DiagnosisFields {
            patient_id: validation::reference_id("patient_id", &self.patient_id)?,
            diagnosis: validation::flag("diagnosis", &self.diagnosis)?,
        })
    }
}

impl ToRecord for DiagnosisFields {
    fn to_record(&self) -> Record {
        Record::new()
            .with("patient_id", self.patient_id)
            .with("diagnosis", self.diagnosis)
    }
}

impl FromRecord for Diagnosis {
    fn from_record(record: &Record) -> RecordResult<Self> {
        Ok(Diagnosis {
            diagnosis_id: record.get_u64(Table::Diagnosis.key_column())?,
            patient_id: record.get_u64("patient_id")?,
            diagnosis: record.get_i64("diagnosis")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use serde_json::json;

    #[test]
    fn diagnosis_flag_outside_zero_one_is_rejected() {
        let request: DiagnosisRequest =
            serde_json::from_value(json!({"patient_id": 1, "diagnosis": 2})).unwrap();
        assert!(matches!(
            request.validate(),
            Err(ValidationError::ConstraintViolated { field: "diagnosis", .. })
        ));
    }

    #[test]
    fn valid_request_maps_to_row() {
        let request: DiagnosisRequest =
            serde_json::from_value(json!({"patient_id": 3, "diagnosis": 1})).unwrap();
        let row = request.validate().unwrap().to_record().with("diagnosis_id", 9i64);
        assert_eq!(
            Diagnosis::from_record(&row).unwrap(),
            Diagnosis { diagnosis_id: 9, patient_id: 3, diagnosis: 1 }
        );
    }
}
