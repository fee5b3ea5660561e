// models/src/medical/gender.rs

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};
use crate::validation;

/// Stored as a 0/1 code (1 = male, 0 = female), displayed as its label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn code(self) -> i64 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Gender::Female),
            1 => Some(Gender::Male),
            _ => None,
        }
    }

    /// Case-insensitive label lookup; surrounding whitespace is ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("male") {
            Some(Gender::Male)
        } else if label.eq_ignore_ascii_case("female") {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// Accepts either wire form: the integer code or the label string.
    pub fn parse(value: &Value) -> ValidationResult<Self> {
        let parsed = match value {
            Value::Number(n) => validation::integral("gender", n).ok().and_then(Gender::from_code),
            Value::String(s) => Gender::from_label(s),
            _ => None,
        };
        parsed.ok_or_else(|| ValidationError::InvalidGender(value.to_string()))
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
