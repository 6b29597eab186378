//! # Order Storage
//!
//! Key/value persistence slots holding the JSON-serialized order list.
//! A slot is read once when the service opens and rewritten after every
//! successful mutation. There is no versioning or migration: a slot that
//! fails to parse is treated as an empty list.

use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing::{debug, warn};

use crate::{errors::TransportError, implementation::transport_orders::TransportOrder};

/// Named string slots, in the manner of browser local storage.
pub trait OrderStore: Debug + Send + Sync {
    /// Reads a slot; `None` if it has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, TransportError>;

    /// Overwrites a slot.
    fn write(&self, key: &str, value: &str) -> Result<(), TransportError>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// Process-local store. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, TransportError> {
        let slots = self.slots.lock().map_err(|_| TransportError::LockError)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TransportError> {
        let mut slots = self.slots.lock().map_err(|_| TransportError::LockError)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// FILE STORE
// ============================================================================

/// One `<key>.json` file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`; the directory is created on first
    /// write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the slot files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a slot.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl OrderStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, TransportError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), TransportError> {
        fs::create_dir_all(&self.dir)?;
        // Write beside the slot and rename so a crash never leaves half a file.
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

// ============================================================================
// ORDER LIST CODEC
// ============================================================================

/// Reads the order list from a slot.
///
/// An empty slot yields the sample order when `seed_sample` is set and an
/// empty list otherwise. Unparsable contents yield an empty list.
pub fn load_orders<S: OrderStore + ?Sized>(
    store: &S, key: &str, seed_sample: bool,
) -> Result<Vec<TransportOrder>, TransportError> {
    let Some(raw) = store.read(key)? else {
        debug!(key, seed_sample, "storage slot empty");
        return Ok(if seed_sample { vec![TransportOrder::sample()] } else { Vec::new() });
    };

    match serde_json::from_str::<Vec<TransportOrder>>(&raw) {
        Ok(orders) => {
            debug!(key, count = orders.len(), "loaded transport orders");
            Ok(orders)
        },
        Err(err) => {
            warn!(key, error = %err, "storage slot unreadable, starting with no orders");
            Ok(Vec::new())
        },
    }
}

/// Writes the order list to a slot as a JSON array.
pub fn save_orders<S: OrderStore + ?Sized>(
    store: &S, key: &str, orders: &[TransportOrder],
) -> Result<(), TransportError> {
    let raw = serde_json::to_string(orders)?;
    store.write(key, &raw)
}

#[cfg(test)]
mod tests;
