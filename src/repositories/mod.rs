mod file_store;
mod memory_store;
mod submission_log;
mod traits;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use submission_log::{SubmissionLog, SUBMISSIONS_KEY};
pub use traits::KeyValueStore;
