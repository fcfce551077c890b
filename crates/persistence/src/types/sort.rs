//! Sort arguments for the sorted patient view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A field the collection may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// The record key.
    Id,
    /// Date of the last visit.
    LastVisit,
    /// Height in centimeters.
    Height,
    /// Weight in kilograms.
    Weight,
}

impl SortField {
    /// Every allowed sort field.
    pub const ALL: [SortField; 4] = [
        SortField::Id,
        SortField::LastVisit,
        SortField::Height,
        SortField::Weight,
    ];

    /// Returns the wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::LastVisit => "last_visit",
            SortField::Height => "height",
            SortField::Weight => "weight",
        }
    }

    fn allowed() -> String {
        Self::ALL
            .iter()
            .map(SortField::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| QueryError::InvalidSortField {
                field: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortOrder {
    /// Returns the wire name of this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(QueryError::InvalidSortOrder {
                order: other.to_string(),
            }),
        }
    }
}

/// A parsed sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort by.
    pub field: SortField,
    /// The sort order.
    pub order: SortOrder,
}

impl SortDirective {
    /// Creates a directive.
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Parses raw arguments. A missing `order` means ascending.
    ///
    /// Both arguments are validated before anything else happens, so an
    /// unknown field never reaches the data.
    pub fn parse(field: &str, order: Option<&str>) -> Result<Self, QueryError> {
        let field = field.parse()?;
        let order = order.map(str::parse).transpose()?.unwrap_or_default();
        Ok(Self { field, order })
    }
}
