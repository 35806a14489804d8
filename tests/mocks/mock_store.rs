use contact_form_validator::error::{StoreError, StoreResult};
use contact_form_validator::repositories::KeyValueStore;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock key/value store for testing.
///
/// Keeps entries in memory, tracks method calls for verification, and can
/// be switched into a mode where every write fails.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a new empty MockStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set`/`remove` fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Raw stored value, bypassing call tracking.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_writable(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for MockStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.track_call("get");
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.track_call("set");
        self.check_writable()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.track_call("remove");
        self.check_writable()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
