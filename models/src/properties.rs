// models/src/properties.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::errors::{RecordError, RecordResult};

/// A single column value as it travels between the entities and a datastore.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Null,
}

impl From<i64> for FieldValue { fn from(i: i64) -> Self { FieldValue::Integer(i) } }
impl From<f64> for FieldValue { fn from(f: f64) -> Self { FieldValue::Float(f) } }
impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        // Identifiers come from AUTO_INCREMENT columns and stay far below i64::MAX.
        FieldValue::Integer(i64::try_from(u).unwrap_or(i64::MAX))
    }
}

impl FieldValue {
    /// Integer view. Floats qualify only when they carry no fractional part,
    /// which is how some drivers hand back integral DECIMAL columns.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Float(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
                Some(*f as i64)
            }
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// A row represented as an ordered column-name to value mapping.
///
/// Column order is insertion order, so statements built from a `Record` list
/// their columns deterministically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(column, value);
        self
    }

    /// Sets a column, replacing any previous value in place.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Copies every column of `changes` over this record.
    pub fn merge(&mut self, changes: &Record) {
        for (column, value) in changes.iter() {
            self.set(column, value.clone());
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get_i64(&self, column: &str) -> RecordResult<i64> {
        self.get(column)
            .and_then(FieldValue::as_i64)
            .ok_or_else(|| RecordError::MalformedRow(format!("column '{}' is not an integer", column)))
    }

    pub fn get_u64(&self, column: &str) -> RecordResult<u64> {
        let value = self.get_i64(column)?;
        u64::try_from(value)
            .map_err(|_| RecordError::MalformedRow(format!("column '{}' is negative", column)))
    }

    pub fn get_f64(&self, column: &str) -> RecordResult<f64> {
        self.get(column)
            .and_then(FieldValue::as_f64)
            .ok_or_else(|| RecordError::MalformedRow(format!("column '{}' is not numeric", column)))
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.set(column, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Maps an entity to the columns it writes.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

/// Maps a stored row back to its entity.
pub trait FromRecord: Sized {
    fn from_record(record: &Record) -> RecordResult<Self>;
}
