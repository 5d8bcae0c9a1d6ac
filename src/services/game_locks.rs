// src/services/game_locks.rs - one async mutex per key (game id or owner id)

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = Arc<StdMutex<HashMap<String, Arc<Mutex<()>>>>>;

/// Serialises work on the same key. Different keys never wait on each
/// other. An entry lives only while someone holds or waits for it.
#[derive(Clone, Default)]
pub struct GameLocks {
    locks: LockMap,
}

/// Exclusive access to one key; dropping it releases the key and forgets
/// the entry when nobody else is waiting.
pub struct LockGuard {
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
    locks: LockMap,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Wait for exclusive access to `key`; released when the guard drops.
    pub async fn acquire(&self, key: &str) -> LockGuard {
        let guard = self.lock_for(key).lock_owned().await;
        LockGuard {
            key: key.to_string(),
            guard: Some(guard),
            locks: self.locks.clone(),
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.locks.lock().map(|locks| locks.len()).unwrap_or(0)
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        // release the mutex (and its Arc clone) before counting holders
        self.guard.take();
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if locks
            .get(&self.key)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_key_waits() {
        let locks = GameLocks::new();
        let guard = locks.acquire("g1").await;

        let other = locks.clone();
        let waiter = tokio::spawn(async move {
            let _guard = other.acquire("g1").await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.expect("waiter completes");
    }

    #[tokio::test]
    async fn test_different_keys_do_not_block() {
        let locks = GameLocks::new();
        let _first = locks.acquire("g1").await;
        let second = tokio::time::timeout(Duration::from_millis(100), locks.acquire("g2")).await;
        assert!(second.is_ok());
        assert_eq!(locks.tracked(), 2);
    }

    #[tokio::test]
    async fn test_released_keys_are_forgotten() {
        let locks = GameLocks::new();
        for id in ["g1", "g2", "g3"] {
            let _guard = locks.acquire(id).await;
        }
        assert_eq!(locks.tracked(), 0);
    }

    #[tokio::test]
    async fn test_entry_kept_while_someone_waits() {
        let locks = GameLocks::new();
        let guard = locks.acquire("g1").await;

        let other = locks.clone();
        let waiter = tokio::spawn(async move {
            let _guard = other.acquire("g1").await;
            tokio::time::sleep(Duration::from_millis(20)).await;
        });
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(guard);
        assert_eq!(locks.tracked(), 1);

        waiter.await.expect("waiter completes");
        assert_eq!(locks.tracked(), 0);
    }
}
