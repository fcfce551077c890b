//! Test infrastructure for the persistence layer.
//!
//! This module provides reusable fixtures for testing patient stores.

#![allow(dead_code)]

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::*;
