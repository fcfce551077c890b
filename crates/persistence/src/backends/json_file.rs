//! JSON-file backend.
//!
//! The whole collection lives in one JSON document mapping patient id to the
//! record's non-id fields:
//!
//! ```json
//! {
//!   "P001": {"name": "Ananya Verma", "age": 28, "gender": "female", ...},
//!   "P002": {...}
//! }
//! ```
//!
//! Saves write a temporary file in the same directory, sync it, then rename it
//! over the target, so readers never see a half-written document.

use std::fmt::Debug;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::core::CollectionStore;
use crate::error::{BackendError, StorageResult};
use crate::schema;
use crate::types::PatientCollection;

const BACKEND_NAME: &str = "json-file";

/// File-backed patient store.
pub struct JsonFileBackend {
    path: PathBuf,
    config: JsonFileBackendConfig,
}

impl Debug for JsonFileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileBackend")
            .field("path", &self.path)
            .field("config", &self.config)
            .finish()
    }
}

/// Configuration for the JSON-file backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFileBackendConfig {
    /// Pretty-print the document on save.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Write an empty collection if the file does not exist yet.
    #[serde(default)]
    pub create_if_missing: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JsonFileBackendConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            create_if_missing: false,
        }
    }
}

impl JsonFileBackend {
    /// Opens an existing data file with the default configuration.
    ///
    /// The file is not read until the first [`load`](CollectionStore::load).
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, JsonFileBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    ///
    /// With `create_if_missing`, an empty collection is written when the file
    /// is absent.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: JsonFileBackendConfig,
    ) -> StorageResult<Self> {
        let backend = Self {
            path: path.as_ref().to_path_buf(),
            config,
        };

        if backend.config.create_if_missing && !backend.path.exists() {
            info!(path = %backend.path.display(), "Initializing empty patient data file");
            if let Some(parent) = backend.parent_dir().filter(|p| !p.exists()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BackendError::io(BACKEND_NAME, format!("create {}", parent.display()), e)
                })?;
            }
            backend.write_collection(&PatientCollection::new())?;
        }

        Ok(backend)
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &JsonFileBackendConfig {
        &self.config
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn read_collection(&self) -> StorageResult<PatientCollection> {
        let bytes = std::fs::read(&self.path).map_err(|e| BackendError::Unavailable {
            backend_name: BACKEND_NAME.to_string(),
            message: format!("cannot read {}: {}", self.path.display(), e),
        })?;

        let collection: PatientCollection =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Corrupt {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("{}: {}", self.path.display(), e),
            })?;

        for (id, patient) in &collection {
            schema::validate_patient(id, patient).map_err(|e| BackendError::Corrupt {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("{}: record {}: {}", self.path.display(), id, e),
            })?;
        }

        Ok(collection)
    }

    fn write_collection(&self, collection: &PatientCollection) -> StorageResult<()> {
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(collection)?
        } else {
            serde_json::to_vec(collection)?
        };

        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| {
            BackendError::io(BACKEND_NAME, format!("create temp file in {}", dir.display()), e)
        })?;
        tmp.write_all(&bytes)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| BackendError::io(BACKEND_NAME, "write temp file", e))?;
        tmp.persist(&self.path).map_err(|e| {
            BackendError::io(BACKEND_NAME, format!("replace {}", self.path.display()), e.error)
        })?;

        Ok(())
    }
}

#[async_trait]
impl CollectionStore for JsonFileBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn load(&self) -> StorageResult<PatientCollection> {
        let collection = self.read_collection()?;
        debug!(path = %self.path.display(), records = collection.len(), "Loaded patient data");
        Ok(collection)
    }

    async fn save(&self, collection: &PatientCollection) -> StorageResult<()> {
        self.write_collection(collection)?;
        debug!(path = %self.path.display(), records = collection.len(), "Saved patient data");
        Ok(())
    }
}
