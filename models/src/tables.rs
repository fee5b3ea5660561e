// models/src/tables.rs

use std::fmt;

/// The three relational tables behind the API.
///
/// Each table has a system-assigned integer key and a fixed, known set of
/// data columns. Storage backends only ever build statements from these
/// names, never from caller-supplied strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Patients,
    MedicalTests,
    Diagnosis,
}

const PATIENT_COLUMNS: &[&str] = &["age", "gender"];

const MEDICAL_TEST_COLUMNS: &[&str] = &[
    "patient_id",
    "total_bilirubin",
    "direct_bilirubin",
    "alkaline_phosphotase",
    "alamine_aminotransferase",
    "aspartate_aminotransferase",
    "total_proteins",
    "albumin",
    "albumin_and_globulin_ratio",
];

const DIAGNOSIS_COLUMNS: &[&str] = &["patient_id", "diagnosis"];

impl Table {
    pub const ALL: [Table; 3] = [Table::Patients, Table::MedicalTests, Table::Diagnosis];

    /// SQL table name.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Patients => "patients",
            Table::MedicalTests => "medical_tests",
            Table::Diagnosis => "diagnosis",
        }
    }

    /// Name of the auto-increment primary key column.
    pub fn key_column(&self) -> &'static str {
        match self {
            Table::Patients => "patient_id",
            Table::MedicalTests => "test_id",
            Table::Diagnosis => "diagnosis_id",
        }
    }

    /// Data columns in declaration order, key excluded.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Patients => PATIENT_COLUMNS,
            Table::MedicalTests => MEDICAL_TEST_COLUMNS,
            Table::Diagnosis => DIAGNOSIS_COLUMNS,
        }
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns().contains(&column)
    }

    /// Human-readable name used in not-found messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Table::Patients => "Patient",
            Table::MedicalTests => "Medical test",
            Table::Diagnosis => "Diagnosis",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn key_column_is_not_a_data_column() {
        for table in Table::ALL {
            assert!(!table.has_column(table.key_column()));
        }
    }

    #[test]
    fn medical_tests_carry_patient_reference_and_eight_measurements() {
        let columns = Table::MedicalTests.columns();
        assert_eq!(columns.len(), 9);
        assert_eq!(columns[0], "patient_id");
    }
}
