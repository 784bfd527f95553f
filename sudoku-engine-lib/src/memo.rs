//! Contains [`MemoStore`], a shared cache for expensive constraint
//! subresults.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A keyed, append-only cache.
///
/// Constraints use this for combinatorial subresults such as permutation
/// enumerations. Entries are never mutated after insertion, so the store can
/// be shared between cloned boards and search branches. The soundness of
/// that sharing rests entirely on the keys: a key must encode every input
/// the computation read, including every candidate mask it looked at.
#[derive(Debug, Default)]
pub struct MemoStore {
    entries: Mutex<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl MemoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches a previously stored value.
    ///
    /// Returns `None` when the key is absent or was stored with a different
    /// type.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .and_then(|entry| entry.clone().downcast::<T>().ok())
    }

    /// Stores a value and returns the shared handle to it.
    ///
    /// Storing under an existing key replaces the handle; callers with the
    /// old handle keep a consistent value because entries are immutable.
    pub fn store<T: Any + Send + Sync>(&self, key: &str, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_owned(), value.clone());
        value
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// True if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let store = MemoStore::new();
        assert!(store.is_empty());
        assert!(store.get::<Vec<usize>>("missing").is_none());

        store.store("key", vec![1usize, 2, 3]);
        let cached = store.get::<Vec<usize>>("key").unwrap();
        assert_eq!(*cached, vec![1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_type_mismatch() {
        let store = MemoStore::new();
        store.store("key", 7usize);
        assert!(store.get::<String>("key").is_none());
        assert_eq!(*store.get::<usize>("key").unwrap(), 7);
    }
}
