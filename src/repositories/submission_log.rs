use crate::error::{StoreError, StoreResult};
use crate::models::{ContactFormData, Submission};
use crate::repositories::traits::KeyValueStore;
use chrono::Utc;
use std::sync::Mutex;

/// Store key the submission list lives under.
pub const SUBMISSIONS_KEY: &str = "contactSubmissions";

/// Append-only log of accepted contact form submissions.
///
/// The whole list is kept as one JSON array under [`SUBMISSIONS_KEY`]. Ids
/// continue from the last stored entry, so they stay increasing across
/// reopenings of a persistent store.
///
/// Writes hold `write_lock` across the whole read-modify-write, so a log
/// shared between threads never hands out the same id twice. Other handles
/// onto the same store are not covered by the lock.
#[derive(Debug)]
pub struct SubmissionLog<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> SubmissionLog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a submission and return the stored entry.
    pub fn append(&self, data: ContactFormData) -> StoreResult<Submission> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut submissions = self.list()?;
        let id = match submissions.last() {
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or(StoreError::IdOverflow(last.id))?,
            None => 1,
        };

        let submission = Submission {
            id,
            submitted_at: Utc::now(),
            data,
        };
        submissions.push(submission.clone());

        self.store
            .set(SUBMISSIONS_KEY, &serde_json::to_string(&submissions)?)?;

        tracing::info!(submission_id = id, "Recorded contact submission");
        Ok(submission)
    }

    /// All submissions in the order they were recorded.
    pub fn list(&self) -> StoreResult<Vec<Submission>> {
        match self.store.get(SUBMISSIONS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Drop every recorded submission.
    pub fn clear(&self) -> StoreResult<()> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        self.store.remove(SUBMISSIONS_KEY)
    }
}
