//! Application state for the PatientTrack HTTP API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the patient service and the server configuration.
//! Handlers receive it through axum's `State` extractor; there is no
//! process-wide store handle.

use std::sync::Arc;

use patienttrack_persistence::PatientService;
use patienttrack_persistence::core::CollectionStore;

use crate::config::ServerConfig;

/// Shared application state for the API.
///
/// # Type Parameters
///
/// * `S` - The store type (must implement [`CollectionStore`])
///
/// # Example
///
/// ```rust
/// use patienttrack_rest::{AppState, ServerConfig};
/// use patienttrack_persistence::backends::InMemoryBackend;
/// use patienttrack_persistence::PatientService;
/// use std::sync::Arc;
///
/// let service = PatientService::new(InMemoryBackend::new());
/// let state = AppState::new(Arc::new(service), ServerConfig::default());
/// assert_eq!(state.backend_name(), "memory");
/// ```
pub struct AppState<S: CollectionStore> {
    /// The patient service.
    service: Arc<PatientService<S>>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S: CollectionStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: CollectionStore> AppState<S> {
    /// Creates a new AppState with the given service and configuration.
    pub fn new(service: Arc<PatientService<S>>, config: ServerConfig) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the patient service.
    pub fn service(&self) -> &PatientService<S> {
        &self.service
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the name of the store behind the service.
    pub fn backend_name(&self) -> &'static str {
        self.service.backend_name()
    }
}
