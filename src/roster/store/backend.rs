use crate::error::Result;

/// Abstract interface for raw key-value I/O.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::KvDataStore`] handles the "what" (encoding records, CRUD).
pub trait KeyValueBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever stored there.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic so that a reader never sees a partial value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
