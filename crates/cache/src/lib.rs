use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// Keyed in-memory cache with two windows per entry:
/// `stale_after` marks a hit as stale (usable, but worth a refetch) and
/// `lifetime` evicts it entirely. Mutation is explicit: `mutate` writes an
/// optimistic value in place, `invalidate` drops the entry.
#[derive(Clone)]
pub struct Cache<T> {
    inner: Arc<Mutex<HashMap<String, Entry<T>>>>,
    stale_after: Duration,
    lifetime: Duration,
}

struct Entry<T> {
    stored_at: DateTime<Utc>,
    value: T,
}

pub struct Hit<T> {
    pub value: T,
    pub is_stale: bool,
}

impl<T: Clone> Cache<T> {
    pub fn new(stale_after: Duration, lifetime: Duration) -> Self {
        Cache {
            inner: Arc::new(Mutex::new(HashMap::new())),
            stale_after,
            lifetime,
        }
    }

    pub fn get(&self, key: &str) -> Option<Hit<T>> {
        self.get_at(key, Utc::now())
    }

    pub fn set(&self, key: impl Into<String>, value: T) {
        self.set_at(key, value, Utc::now());
    }

    /// Optimistic in-place update. A no-op when the key is absent: there is
    /// nothing to patch, the next `get` misses and the caller refetches.
    pub fn mutate(&self, key: &str, f: impl FnOnce(&mut T)) {
        let mut map = self.inner.lock();
        if let Some(entry) = map.get_mut(key) {
            f(&mut entry.value);
        }
    }

    pub fn invalidate(&self, key: &str) {
        self.inner.lock().remove(key);
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<Hit<T>> {
        let mut map = self.inner.lock();
        let entry = map.get(key)?;
        let age = now - entry.stored_at;
        if age >= self.lifetime {
            map.remove(key);
            return None;
        }
        Some(Hit {
            value: entry.value.clone(),
            is_stale: age >= self.stale_after,
        })
    }

    fn set_at(&self, key: impl Into<String>, value: T, now: DateTime<Utc>) {
        self.inner.lock().insert(
            key.into(),
            Entry {
                stored_at: now,
                value,
            },
        );
    }
}
