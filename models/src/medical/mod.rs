// models/src/medical/mod.rs

pub mod diagnosis;
pub mod gender;
pub mod patient;

pub use diagnosis::{Diagnosis, DiagnosisFields, DiagnosisRequest};
pub use gender::Gender;
pub use medical_test::{MedicalTest, MedicalTestChanges, MedicalTestFields, MedicalTestPatch, NewMedicalTest};
pub use patient::{Patient, PatientFields, PatientRequest};
