use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The kind of datum an input field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Real-valued slider (e.g. 0–10 or 0–100).
    Continuous,
    /// Integer joint count.
    Count,
    /// Non-negative laboratory measurement.
    Lab,
    /// Integer activity level of a weighted domain (ESSDAI).
    Level,
    /// Presence of a finding (SLEDAI).
    Flag,
}

impl FieldKind {
    /// Whether values of this kind must be whole numbers.
    pub fn is_integral(self) -> bool {
        matches!(self, FieldKind::Count | FieldKind::Level)
    }
}

/// Numeric domain of a field. `max: None` leaves the range open upwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: Option<f64>,
    /// When set, `min` itself lies outside the range.
    pub min_exclusive: bool,
}

impl ValueRange {
    pub const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
            min_exclusive: false,
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min,
            max: None,
            min_exclusive: false,
        }
    }

    pub const fn above(min: f64) -> Self {
        Self {
            min,
            max: None,
            min_exclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.min_exclusive {
            value > self.min
        } else {
            value >= self.min
        };
        above_min && self.max.is_none_or(|max| value <= max)
    }
}

/// One datum an index needs.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputField {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub range: ValueRange,
    pub unit: Option<String>,
    pub required: bool,
    /// Checklist weight: points per level (ESSDAI) or when present (SLEDAI).
    pub weight: Option<f64>,
    /// Selectable levels of a `level` field; empty for every other kind.
    pub levels: Vec<u8>,
}

impl InputField {
    fn new(id: &str, name: &str, kind: FieldKind, range: ValueRange) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            range,
            unit: None,
            required: true,
            weight: None,
            levels: Vec::new(),
        }
    }

    pub fn continuous(id: &str, name: &str, max: f64) -> Self {
        Self::new(id, name, FieldKind::Continuous, ValueRange::closed(0.0, max))
    }

    pub fn count(id: &str, name: &str, max: u32) -> Self {
        Self::new(id, name, FieldKind::Count, ValueRange::closed(0.0, f64::from(max)))
    }

    pub fn lab(id: &str, name: &str, unit: &str) -> Self {
        Self {
            unit: Some(unit.to_string()),
            ..Self::new(id, name, FieldKind::Lab, ValueRange::at_least(0.0))
        }
    }

    /// Optional domain scored `level × weight`; absent means level 0.
    /// `levels` lists the selectable levels in ascending order, 0 included.
    pub fn level(id: &str, name: &str, levels: &[u8], weight: f64) -> Self {
        let max_level = levels.iter().copied().max().unwrap_or(0);
        Self {
            required: false,
            weight: Some(weight),
            levels: levels.to_vec(),
            ..Self::new(
                id,
                name,
                FieldKind::Level,
                ValueRange::closed(0.0, f64::from(max_level)),
            )
        }
    }

    /// Optional finding contributing `weight` when present; absent means not present.
    pub fn flag(id: &str, name: &str, weight: f64) -> Self {
        Self {
            required: false,
            weight: Some(weight),
            ..Self::new(id, name, FieldKind::Flag, ValueRange::closed(0.0, 1.0))
        }
    }

    /// Whether `value` lies in the field's domain, including gaps in its
    /// selectable levels.
    pub fn admits(&self, value: f64) -> bool {
        self.range.contains(value)
            && (self.levels.is_empty() || self.levels.iter().any(|l| f64::from(*l) == value))
    }

    /// Restrict a lab value to strictly positive numbers (bare logarithm terms).
    pub fn strictly_positive(mut self) -> Self {
        self.range = ValueRange::above(0.0);
        self
    }
}

/// A value as supplied by the caller, before parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RawValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// JSON `null`, as forms send for an empty field.
    Null,
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Raw input set keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs(BTreeMap<String, RawValue>);

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: impl Into<RawValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &str, value: impl Into<RawValue>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&RawValue> {
        self.0.get(id)
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Parsed, domain-checked snapshot of every declared field.
///
/// Flags are stored as `0.0`/`1.0`; optional fields the caller left out are
/// stored as `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInputs {
    values: BTreeMap<String, f64>,
}

impl ValidatedInputs {
    pub(crate) fn insert(&mut self, id: &str, value: f64) {
        self.values.insert(id.to_string(), value);
    }

    /// Value of a declared field. Evaluators only ask for their own fields,
    /// which validation always populates.
    pub fn get(&self, id: &str) -> f64 {
        debug_assert!(
            self.values.contains_key(id),
            "undeclared field `{id}` read from validated inputs"
        );
        self.values.get(id).copied().unwrap_or(0.0)
    }

    pub fn is_set(&self, id: &str) -> bool {
        self.get(id) > 0.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
