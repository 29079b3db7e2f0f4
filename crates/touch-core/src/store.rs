//! ParamStore trait - the persistence seam for the touch control service

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};

/// Parameter that gates touchscreen event processing
pub const DISABLE_TOUCH_INPUT: &str = "DisableTouchInput";

/// Persistent key-value store of named boolean settings.
///
/// Implementations own persistence; callers only see `get_bool`/`put_bool`.
/// A key that was never written reads as `false`.
#[async_trait]
pub trait ParamStore: Send + Sync {
    /// Short label for logs (e.g. "file", "memory")
    fn name(&self) -> &str;

    /// Read a boolean parameter
    async fn get_bool(&self, key: &str) -> StoreResult<bool>;

    /// Write a boolean parameter
    async fn put_bool(&self, key: &str, value: bool) -> StoreResult<()>;
}

/// Reject keys that are empty or could address something outside the store.
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);

    if invalid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key(DISABLE_TOUCH_INPUT).is_ok());
        assert!(validate_key("IsMetric").is_ok());

        assert!(validate_key("").is_err());
        assert!(validate_key(".").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../etc/passwd").is_err());
        assert!(validate_key("a\\b").is_err());
    }
}
