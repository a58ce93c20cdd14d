use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why an input set was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FailureReason {
    /// A required field is absent or empty.
    Missing,
    /// The value cannot be parsed to the field's numeric type.
    NotANumber,
    /// The value lies outside the field's numeric domain.
    OutOfDomain,
    /// Unknown index id, or a missing/invalid mode selector.
    UnknownMode,
}

impl FailureReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureReason::Missing => "missing",
            FailureReason::NotANumber => "not_a_number",
            FailureReason::OutOfDomain => "out_of_domain",
            FailureReason::UnknownMode => "unknown_mode",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{}", describe(.field, .reason))]
pub struct ValidationError {
    /// Offending field id; `None` for index/mode resolution failures.
    pub field: Option<String>,
    pub reason: FailureReason,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self::for_field(field, FailureReason::Missing)
    }

    pub fn not_a_number(field: &str) -> Self {
        Self::for_field(field, FailureReason::NotANumber)
    }

    pub fn out_of_domain(field: &str) -> Self {
        Self::for_field(field, FailureReason::OutOfDomain)
    }

    pub fn unknown_mode() -> Self {
        Self {
            field: None,
            reason: FailureReason::UnknownMode,
        }
    }

    fn for_field(field: &str, reason: FailureReason) -> Self {
        Self {
            field: Some(field.to_string()),
            reason,
        }
    }
}

fn describe(field: &Option<String>, reason: &FailureReason) -> String {
    match field {
        Some(field) => format!("{field}: {}", reason.as_str()),
        None => reason.as_str().to_string(),
    }
}
