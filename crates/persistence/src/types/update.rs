//! Partial update payloads.

use serde::Serialize;

use super::patient::{Gender, Patient};

/// A sparse set of attribute changes.
///
/// `None` means "leave unchanged". The id is never part of an update.
/// Field meanings match [`Patient`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<String>,
}

impl PatientUpdate {
    /// Returns `true` if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == PatientUpdate::default()
    }

    /// Names of the fields this update sets, in declaration order.
    pub fn fields(&self) -> Vec<&'static str> {
        let present = [
            ("name", self.name.is_some()),
            ("age", self.age.is_some()),
            ("gender", self.gender.is_some()),
            ("contact", self.contact.is_some()),
            ("diagnosis", self.diagnosis.is_some()),
            ("last_visit", self.last_visit.is_some()),
            ("height", self.height.is_some()),
            ("weight", self.weight.is_some()),
            ("city", self.city.is_some()),
            ("verdict", self.verdict.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    /// Builds the merged candidate: a copy of `base` with every present field
    /// overwritten. `base` itself is untouched.
    pub fn apply(&self, base: &Patient) -> Patient {
        let mut merged = base.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(age) = self.age {
            merged.age = age;
        }
        if let Some(gender) = self.gender {
            merged.gender = gender;
        }
        if let Some(contact) = &self.contact {
            merged.contact = contact.clone();
        }
        if let Some(diagnosis) = &self.diagnosis {
            merged.diagnosis = diagnosis.clone();
        }
        if let Some(last_visit) = &self.last_visit {
            merged.last_visit = last_visit.clone();
        }
        if let Some(height) = self.height {
            merged.height = height;
        }
        if let Some(weight) = self.weight {
            merged.weight = weight;
        }
        if let Some(city) = &self.city {
            merged.city = city.clone();
        }
        if let Some(verdict) = &self.verdict {
            merged.verdict = verdict.clone();
        }
        merged
    }
}
