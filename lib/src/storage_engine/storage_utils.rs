// lib/src/storage_engine/storage_utils.rs

// Statement text for the relational backends. Every identifier that ends up in
// SQL comes from `Table`, never from a request.

use models::errors::{RecordError, RecordResult};
use models::{Record, Table};

/// Rejects records naming columns the table does not have.
pub fn check_columns(table: Table, record: &Record) -> RecordResult<()> {
    match record.columns().find(|column| !table.has_column(column)) {
        Some(column) => Err(RecordError::StorageError(format!(
            "unknown column '{}' for table {}",
            column, table
        ))),
        None => Ok(()),
    }
}

fn selected_columns(table: Table) -> String {
    std::iter::once(table.key_column())
        .chain(table.columns().iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn select_all_statement(table: Table) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        selected_columns(table),
        table.name(),
        table.key_column()
    )
}

pub fn select_one_statement(table: Table) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        selected_columns(table),
        table.name(),
        table.key_column()
    )
}

/// Existence probe that also locks the row for the rest of the transaction.
pub fn lock_row_statement(table: Table) -> String {
    format!(
        "SELECT {key} FROM {} WHERE {key} = ? FOR UPDATE",
        table.name(),
        key = table.key_column()
    )
}

pub fn exists_statement(table: Table) -> String {
    format!("SELECT 1 FROM {} WHERE {} = ?", table.name(), table.key_column())
}

pub fn insert_statement(table: Table, record: &Record) -> String {
    let columns: Vec<&str> = record.columns().collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.name(),
        columns.join(", "),
        placeholders
    )
}

pub fn update_statement(table: Table, changes: &Record) -> String {
    let assignments = changes
        .columns()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        table.name(),
        assignments,
        table.key_column()
    )
}

pub fn delete_statement(table: Table) -> String {
    format!("DELETE FROM {} WHERE {} = ?", table.name(), table.key_column())
}

// No FOREIGN KEY clauses: patient references are checked by the handlers before
// insert, and deleting a patient leaves dependent rows in place.
pub fn create_table_statement(table: Table) -> &'static str {
    match table {
        Table::Patients => {
            "CREATE TABLE IF NOT EXISTS patients (
                patient_id INT AUTO_INCREMENT PRIMARY KEY,
                age INT NOT NULL,
                gender TINYINT NOT NULL
            )"
        }
        Table::MedicalTests => {
            "CREATE TABLE IF NOT EXISTS medical_tests (
                test_id INT AUTO_INCREMENT PRIMARY KEY,
                patient_id INT NOT NULL,
                total_bilirubin DOUBLE NOT NULL,
                direct_bilirubin DOUBLE NOT NULL,
                alkaline_phosphotase INT NOT NULL,
                alamine_aminotransferase INT NOT NULL,
                aspartate_aminotransferase INT NOT NULL,
                total_proteins DOUBLE NOT NULL,
                albumin DOUBLE NOT NULL,
                albumin_and_globulin_ratio DOUBLE NOT NULL,
                INDEX idx_medical_tests_patient (patient_id)
            )"
        }
        Table::Diagnosis => {
            "CREATE TABLE IF NOT EXISTS diagnosis (
                diagnosis_id INT AUTO_INCREMENT PRIMARY KEY,
                patient_id INT NOT NULL,
                diagnosis TINYINT NOT NULL,
                INDEX idx_diagnosis_patient (patient_id)
            )"
        }
    }
}
