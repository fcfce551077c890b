//! Patient record types.
//!
//! A [`Patient`] holds every attribute of a record except its id, which is the
//! collection key. [`PatientRecord`] pairs the two back up for callers that
//! need both, and adds the derived body-mass index.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Gender of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Any other gender.
    Others,
}

impl Gender {
    /// All accepted gender values, in wire form.
    pub const ALL: [&'static str; 3] = ["male", "female", "others"];

    /// Returns the wire form of this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Others => "others",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "others" => Ok(Gender::Others),
            other => Err(ValidationError::invalid(
                "gender",
                format!("'{}' is not one of: {}", other, Gender::ALL.join(", ")),
            )),
        }
    }
}

/// A patient record as persisted, without its id.
///
/// Values of this type are not guaranteed to be valid on their own; run them
/// through [`crate::schema::validate_patient`] before storing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    /// Full name.
    pub name: String,
    /// Age in whole years.
    pub age: i64,
    /// Gender.
    pub gender: Gender,
    /// Contact details (phone, email, ...).
    pub contact: String,
    /// Current diagnosis.
    pub diagnosis: String,
    /// Date of the last visit, `YYYY-MM-DD`.
    pub last_visit: String,
    /// Height in centimeters.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// City of residence.
    pub city: String,
    /// Free-text clinical verdict.
    pub verdict: String,
}

impl Patient {
    /// Body-mass index, `weight / height_m²`, rounded to two decimals.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        let bmi = self.weight / (height_m * height_m);
        (bmi * 100.0).round() / 100.0
    }
}

/// A patient together with its id, as returned by reads and sorted views.
///
/// Serializes flat: `{"id": ..., "name": ..., ..., "bmi": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    /// The record key.
    pub id: String,
    /// The stored attributes.
    #[serde(flatten)]
    pub patient: Patient,
    /// Derived body-mass index.
    pub bmi: f64,
}

impl PatientRecord {
    /// Pairs a patient with its id and computes derived values.
    pub fn new(id: impl Into<String>, patient: Patient) -> Self {
        let bmi = patient.bmi();
        Self {
            id: id.into(),
            patient,
            bmi,
        }
    }
}
