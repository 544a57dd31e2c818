//! Per-owner mutual exclusion for read-modify-write on a profile.
//!
//! Operations on different owners never contend. Entries are dropped from the
//! table once no guard or waiter holds them.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Default)]
pub struct OwnerLocks {
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl OwnerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `owner_id`'s aggregate
    pub async fn acquire(&self, owner_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, l| Arc::strong_count(l) > 1);
            locks.entry(owner_id).or_default().clone()
        };

        lock.lock_owned().await
    }

    /// Number of owners currently tracked
    pub async fn tracked(&self) -> usize {
        let mut locks = self.locks.lock().await;
        locks.retain(|_, l| Arc::strong_count(l) > 1);
        locks.len()
    }
}
