//! In-memory single-slot cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use promoshelf_core::cache::{Result, SlotCache};

/// In-memory cache holding at most one value.
///
/// `get`, `set` and `clear` all take the same mutex, so they never
/// interleave. Clones share the slot.
#[derive(Debug)]
pub struct MemoryCache<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> MemoryCache<T> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryCache<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

#[async_trait]
impl<T> SlotCache<T> for MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self) -> Result<Option<T>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn set(&self, value: T) -> Result<()> {
        *self.slot.lock().await = Some(value);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_empty() {
        let cache: MemoryCache<Vec<u32>> = MemoryCache::new();

        assert_eq!(cache.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();

        cache.set(vec![1, 2, 3]).await.unwrap();

        assert_eq!(cache.get().await.unwrap(), Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new();

        cache.set(vec![1]).await.unwrap();
        cache.set(vec![2, 2]).await.unwrap();

        assert_eq!(cache.get().await.unwrap(), Some(vec![2, 2]));
    }

    #[tokio::test]
    async fn test_empty_value_is_still_present() {
        let cache: MemoryCache<Vec<u32>> = MemoryCache::new();

        cache.set(Vec::new()).await.unwrap();

        assert_eq!(cache.get().await.unwrap(), Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = MemoryCache::new();
        cache.set("cached".to_string()).await.unwrap();

        cache.clear().await.unwrap();

        assert_eq!(cache.get().await.unwrap(), None);
        // Clearing an empty slot is fine
        cache.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_slot() {
        let cache = MemoryCache::new();
        let other = cache.clone();

        cache.set(7_u64).await.unwrap();

        assert_eq!(other.get().await.unwrap(), Some(7));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_last_one_wins() {
        let cache = MemoryCache::new();

        let handles: Vec<_> = (0..32_u32)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    cache.set(vec![i; 8]).await.unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let value = cache.get().await.unwrap().expect("slot populated");
        // Writes never interleave: the slot holds one writer's value whole
        assert_eq!(value.len(), 8);
        assert!(value.iter().all(|v| *v == value[0]));
    }
}
