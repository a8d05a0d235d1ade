//! The `PersistenceSink` trait (§4.4's narrow write/read interface) and two
//! implementations behind it: an in-memory sink for tests and demos, and a
//! filesystem sink for real runs.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{PersistenceError, PersistenceResult};

/// Snapshot key for the network persisted after step `step` (§6).
pub fn network_key(step: u64) -> String {
    format!("street_network_{step}")
}

/// Snapshot key for the traffic-load array persisted after step `step` (§6).
pub fn traffic_load_key(step: u64) -> String {
    format!("traffic_load_{step}")
}

/// Opaque byte persistence, addressed by string key.
///
/// The core treats this purely as a sink/source: nothing in `s4r-sim` or
/// `s4r-network` depends on it, and the concrete encoding lives in
/// [`crate::array`]/[`crate::object`].
pub trait PersistenceSink {
    fn write(&mut self, key: &str, bytes: &[u8]) -> PersistenceResult<()>;
    fn read(&self, key: &str) -> PersistenceResult<Vec<u8>>;
}

/// In-memory sink. Used by tests and as the default backend in `demos/`.
#[derive(Default)]
pub struct MemorySink {
    store: HashMap<String, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceSink for MemorySink {
    fn write(&mut self, key: &str, bytes: &[u8]) -> PersistenceResult<()> {
        self.store.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn read(&self, key: &str) -> PersistenceResult<Vec<u8>> {
        self.store
            .get(key)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(key.to_string()))
    }
}

/// Filesystem sink: one file per key under a base directory, created on
/// construction if it doesn't already exist.
pub struct FsSink {
    base_dir: PathBuf,
}

impl FsSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> PersistenceResult<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

impl PersistenceSink for FsSink {
    fn write(&mut self, key: &str, bytes: &[u8]) -> PersistenceResult<()> {
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }

    fn read(&self, key: &str) -> PersistenceResult<Vec<u8>> {
        fs::read(self.path_for(key)).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => PersistenceError::NotFound(key.to_string()),
            _ => PersistenceError::SnapshotIo(e),
        })
    }
}
