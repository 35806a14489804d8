use crate::error::StoreResult;

/// String key/value storage supplied by the caller.
///
/// Plays the part browser-local storage plays for a web form: flat string
/// keys, string values, whole-value reads and writes. Implementations use
/// interior mutability so a store can be shared behind `&self`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
