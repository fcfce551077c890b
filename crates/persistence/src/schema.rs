//! Patient record schema.
//!
//! [`validate_patient`] is the single gate every record passes before it is
//! stored, whether it arrives through create or is the merged result of an
//! update. The `parse_*` functions turn untyped JSON request bodies into typed
//! values, reporting type mismatches against the offending field.
//!
//! # Constraints
//!
//! | Field | Rule |
//! |-------|------|
//! | `id` | non-empty |
//! | `name` | non-empty |
//! | `age` | `0 < age < 120` |
//! | `gender` | `male`, `female` or `others` |
//! | `last_visit` | calendar date, `YYYY-MM-DD` |
//! | `height` | finite, `> 0` |
//! | `weight` | finite, `> 0` |
//!
//! `contact`, `diagnosis`, `city` and `verdict` only need to be strings.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::types::{Gender, Patient, PatientUpdate};

/// Exclusive lower bound for `age`.
pub const MIN_AGE: i64 = 0;

/// Exclusive upper bound for `age`.
pub const MAX_AGE: i64 = 120;

/// Format of `last_visit`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Record fields in declaration order, excluding `id`.
pub const FIELDS: [&str; 10] = [
    "name",
    "age",
    "gender",
    "contact",
    "diagnosis",
    "last_visit",
    "height",
    "weight",
    "city",
    "verdict",
];

/// Validates a record key.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::invalid("id", "must not be empty"));
    }
    Ok(())
}

/// Validates a full candidate record.
///
/// Fields are checked in declaration order and the first violation is
/// returned.
pub fn validate_patient(id: &str, patient: &Patient) -> Result<(), ValidationError> {
    validate_id(id)?;
    check_name(&patient.name)?;
    check_age(patient.age)?;
    check_last_visit(&patient.last_visit)?;
    check_positive("height", patient.height)?;
    check_positive("weight", patient.weight)?;
    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::invalid("name", "must not be empty"));
    }
    Ok(())
}

fn check_age(age: i64) -> Result<(), ValidationError> {
    if age <= MIN_AGE {
        return Err(ValidationError::invalid(
            "age",
            format!("must be greater than {}", MIN_AGE),
        ));
    }
    if age >= MAX_AGE {
        return Err(ValidationError::invalid(
            "age",
            format!("must be less than {}", MAX_AGE),
        ));
    }
    Ok(())
}

fn check_last_visit(value: &str) -> Result<(), ValidationError> {
    if !is_calendar_date(value) {
        return Err(ValidationError::invalid(
            "last_visit",
            format!("'{}' is not a YYYY-MM-DD date", value),
        ));
    }
    Ok(())
}

/// chrono accepts unpadded fields, a sign and leading whitespace, so the
/// parsed date must format back to the exact input. Sorting by `last_visit`
/// compares the stored strings and relies on this.
fn is_calendar_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .is_ok_and(|date| date.format(DATE_FORMAT).to_string() == value)
}

fn check_positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid(field, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ValidationError::invalid(field, "must be greater than 0"));
    }
    Ok(())
}

/// Parses and validates a create payload: a JSON object holding `id` and every
/// record field.
///
/// Presence and type errors are reported first, in declaration order, then
/// constraint errors in the same order. `gender` membership counts as a
/// constraint. Unknown keys are ignored.
pub fn parse_new_patient(body: &Value) -> Result<(String, Patient), ValidationError> {
    let obj = as_object(body)?;

    let id = string_field("id", required(obj, "id")?)?;
    let name = string_field("name", required(obj, "name")?)?;
    let age = integer_field("age", required(obj, "age")?)?;
    let gender = string_field("gender", required(obj, "gender")?)?;
    let contact = string_field("contact", required(obj, "contact")?)?;
    let diagnosis = string_field("diagnosis", required(obj, "diagnosis")?)?;
    let last_visit = string_field("last_visit", required(obj, "last_visit")?)?;
    let height = float_field("height", required(obj, "height")?)?;
    let weight = float_field("weight", required(obj, "weight")?)?;
    let city = string_field("city", required(obj, "city")?)?;
    let verdict = string_field("verdict", required(obj, "verdict")?)?;

    validate_id(&id)?;
    check_name(&name)?;
    check_age(age)?;
    let gender = gender.parse::<Gender>()?;
    check_last_visit(&last_visit)?;
    check_positive("height", height)?;
    check_positive("weight", weight)?;

    let patient = Patient {
        name,
        age,
        gender,
        contact,
        diagnosis,
        last_visit,
        height,
        weight,
        city,
        verdict,
    };
    Ok((id, patient))
}

/// Parses a partial update payload.
///
/// Types of every present key are checked first, then the constraints of
/// the present fields, both in declaration order. The merged record is
/// validated again as a whole before it is stored.
/// A key set to `null` is rejected because a field can never be cleared.
/// An `id` key is rejected because ids are immutable.
pub fn parse_update(body: &Value) -> Result<PatientUpdate, ValidationError> {
    let obj = as_object(body)?;

    if obj.contains_key("id") {
        return Err(ValidationError::invalid(
            "id",
            "cannot be changed by an update",
        ));
    }

    let name = optional(obj, "name")?
        .map(|v| string_field("name", v))
        .transpose()?;
    let age = optional(obj, "age")?
        .map(|v| integer_field("age", v))
        .transpose()?;
    let gender = optional(obj, "gender")?
        .map(|v| string_field("gender", v))
        .transpose()?;
    let contact = optional(obj, "contact")?
        .map(|v| string_field("contact", v))
        .transpose()?;
    let diagnosis = optional(obj, "diagnosis")?
        .map(|v| string_field("diagnosis", v))
        .transpose()?;
    let last_visit = optional(obj, "last_visit")?
        .map(|v| string_field("last_visit", v))
        .transpose()?;
    let height = optional(obj, "height")?
        .map(|v| float_field("height", v))
        .transpose()?;
    let weight = optional(obj, "weight")?
        .map(|v| float_field("weight", v))
        .transpose()?;
    let city = optional(obj, "city")?
        .map(|v| string_field("city", v))
        .transpose()?;
    let verdict = optional(obj, "verdict")?
        .map(|v| string_field("verdict", v))
        .transpose()?;

    name.as_deref().map(check_name).transpose()?;
    age.map(check_age).transpose()?;
    let gender = gender.as_deref().map(str::parse::<Gender>).transpose()?;
    last_visit.as_deref().map(check_last_visit).transpose()?;
    height.map(|h| check_positive("height", h)).transpose()?;
    weight.map(|w| check_positive("weight", w)).transpose()?;

    Ok(PatientUpdate {
        name,
        age,
        gender,
        contact,
        diagnosis,
        last_visit,
        height,
        weight,
        city,
        verdict,
    })
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object()
        .ok_or_else(|| ValidationError::InvalidPayload {
            message: format!("expected a JSON object, got {}", type_name(body)),
        })
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ValidationError> {
    match obj.get(field) {
        None => Err(ValidationError::MissingRequiredField {
            field: field.to_string(),
        }),
        Some(Value::Null) => Err(ValidationError::invalid(field, "must not be null")),
        Some(value) => Ok(value),
    }
}

fn optional<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> Result<Option<&'a Value>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::Null) => Err(ValidationError::invalid(field, "must not be null")),
        Some(value) => Ok(Some(value)),
    }
}

fn string_field(field: &str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| expected(field, "a string", value))
}

fn integer_field(field: &str, value: &Value) -> Result<i64, ValidationError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if value.is_u64() {
        // Larger than i64::MAX, so certainly out of range.
        return Err(ValidationError::invalid(
            field,
            format!("must be less than {}", MAX_AGE),
        ));
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(expected(field, "an integer", value)),
    }
}

fn float_field(field: &str, value: &Value) -> Result<f64, ValidationError> {
    value
        .as_f64()
        .ok_or_else(|| expected(field, "a number", value))
}

fn expected(field: &str, what: &str, got: &Value) -> ValidationError {
    ValidationError::invalid(field, format!("expected {}, got {}", what, type_name(got)))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
