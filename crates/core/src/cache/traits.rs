use async_trait::async_trait;

use super::Result;

/// A store holding at most one value of type `T`.
///
/// Implementations must make `get`, `set` and `clear` mutually exclusive
/// with each other and must not perform external I/O while holding the
/// slot. There is no expiry: a value stays visible until it is overwritten
/// or cleared.
#[async_trait]
pub trait SlotCache<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    /// Returns the current value, or `None` when the slot is empty.
    async fn get(&self) -> Result<Option<T>>;

    /// Replaces the current value. Last writer wins.
    async fn set(&self, value: T) -> Result<()>;

    /// Empties the slot.
    async fn clear(&self) -> Result<()>;
}
