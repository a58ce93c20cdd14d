use crate::definition::IndexDefinition;
use crate::error::ValidationError;
use crate::scoring::{FieldKind, InputField, RawInputs, RawValue, ValidatedInputs};

/// Check `raw` against the definition's fields, in declaration order.
///
/// Returns a fresh snapshot holding a value for every declared field, or the
/// first failure. Inputs that are not declared fields are ignored.
pub fn validate(
    definition: &IndexDefinition,
    raw: &RawInputs,
) -> Result<ValidatedInputs, ValidationError> {
    let mut validated = ValidatedInputs::default();
    for field in &definition.fields {
        let value = match raw.get(&field.id).filter(|v| !is_blank(v)) {
            Some(value) => parse_value(field, value)?,
            None if field.required => return Err(ValidationError::missing(&field.id)),
            None => 0.0,
        };
        if !field.admits(value) {
            return Err(ValidationError::out_of_domain(&field.id));
        }
        validated.insert(&field.id, value);
    }
    Ok(validated)
}

fn is_blank(value: &RawValue) -> bool {
    match value {
        RawValue::Null => true,
        RawValue::Text(text) => text.trim().is_empty(),
        RawValue::Bool(_) | RawValue::Number(_) => false,
    }
}

fn parse_value(field: &InputField, value: &RawValue) -> Result<f64, ValidationError> {
    let parsed = match field.kind {
        FieldKind::Flag => parse_flag(value).map(|present| if present { 1.0 } else { 0.0 }),
        _ => parse_number(value),
    };
    match parsed {
        Some(v) if !field.kind.is_integral() || v.fract() == 0.0 => Ok(v),
        _ => Err(ValidationError::not_a_number(&field.id)),
    }
}

fn parse_number(value: &RawValue) -> Option<f64> {
    let number = match value {
        RawValue::Number(n) => *n,
        RawValue::Text(text) => text.trim().parse::<f64>().ok()?,
        RawValue::Bool(_) | RawValue::Null => return None,
    };
    number.is_finite().then_some(number)
}

fn parse_flag(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Bool(b) => Some(*b),
        RawValue::Number(n) if *n == 0.0 => Some(false),
        RawValue::Number(n) if *n == 1.0 => Some(true),
        RawValue::Number(_) | RawValue::Null => None,
        RawValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
    }
}
