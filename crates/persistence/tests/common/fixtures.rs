//! Test fixtures for persistence layer testing.
//!
//! Provides a patient builder that renders either a typed [`Patient`] or the
//! JSON body a client would send, plus helpers that seed stores.

use std::path::Path;

use serde_json::{Value, json};

use patienttrack_persistence::backends::{InMemoryBackend, JsonFileBackend};
use patienttrack_persistence::types::{Gender, Patient, PatientCollection};
use patienttrack_persistence::PatientService;

/// A patient fixture for testing.
#[derive(Debug, Clone)]
pub struct PatientFixture {
    /// Record id.
    pub id: String,
    /// The record attributes.
    pub patient: Patient,
}

impl PatientFixture {
    /// Creates a valid fixture with default attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            patient: Patient {
                name: "Ananya Verma".to_string(),
                age: 30,
                gender: Gender::Female,
                contact: "9876543210".to_string(),
                diagnosis: "Hypertension".to_string(),
                last_visit: "2024-05-14".to_string(),
                height: 170.0,
                weight: 65.0,
                city: "Guwahati".to_string(),
                verdict: "Normal".to_string(),
            },
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.patient.name = name.into();
        self
    }

    /// Sets the age.
    pub fn with_age(mut self, age: i64) -> Self {
        self.patient.age = age;
        self
    }

    /// Sets the height in centimetres.
    pub fn with_height(mut self, height: f64) -> Self {
        self.patient.height = height;
        self
    }

    /// Sets the weight in kilograms.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.patient.weight = weight;
        self
    }

    /// Sets the last visit date.
    pub fn with_last_visit(mut self, date: impl Into<String>) -> Self {
        self.patient.last_visit = date.into();
        self
    }

    /// Returns the typed record.
    pub fn patient(&self) -> Patient {
        self.patient.clone()
    }

    /// Returns the record as a create request body, `id` included.
    pub fn to_json(&self) -> Value {
        let mut body = serde_json::to_value(&self.patient).expect("patient serializes");
        body["id"] = json!(self.id);
        body
    }
}

/// Builds a collection from fixtures.
pub fn collection_of(fixtures: &[PatientFixture]) -> PatientCollection {
    fixtures
        .iter()
        .map(|f| (f.id.clone(), f.patient()))
        .collect()
}

/// Creates a service over an in-memory store seeded with `fixtures`.
pub fn memory_service(fixtures: &[PatientFixture]) -> PatientService<InMemoryBackend> {
    PatientService::new(InMemoryBackend::with_collection(collection_of(fixtures)))
}

/// Writes `fixtures` as a data file at `path` and opens a service over it.
pub fn json_file_service(path: &Path, fixtures: &[PatientFixture]) -> PatientService<JsonFileBackend> {
    let document = serde_json::to_vec_pretty(&collection_of(fixtures)).expect("collection serializes");
    std::fs::write(path, document).expect("Failed to write data file");
    open_json_file_service(path)
}

/// Opens a service over whatever is (or is not) at `path`.
pub fn open_json_file_service(path: &Path) -> PatientService<JsonFileBackend> {
    PatientService::new(JsonFileBackend::open(path).expect("Failed to open data file"))
}

/// The single-record collection used by the end-to-end scenario.
pub fn scenario_fixtures() -> Vec<PatientFixture> {
    vec![PatientFixture::new("PT-001").with_age(30).with_height(170.0)]
}
