//! In-memory reference implementation of [`StoreBackend`].
//!
//! Backs the embedded self-test harness and the test suites. State is a
//! plain `HashMap` from key to container entry, in the same shape the
//! commands would see inside a real host's keyspace.

use std::collections::HashMap;

use bytes::Bytes;
use khepri_common::{Error, Field, Key, Result, Value};

use crate::backend::{KeyType, StoreBackend};

/// One container entry in the keyspace.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Hash(HashMap<Field, Value>),
    List(Vec<Value>),
}

/// HashMap-backed store implementing the full [`StoreBackend`] surface.
///
/// # Examples
///
/// ```
/// use khepri_store::{MemoryStore, StoreBackend};
/// use bytes::Bytes;
///
/// let mut store = MemoryStore::new();
/// store.hash_set(b"user:1", b"name", Bytes::from("ada")).unwrap();
/// assert_eq!(store.hash_get(b"user:1", b"name"), Some(Bytes::from("ada")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: HashMap<Key, Entry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Number of keys currently held.
    pub fn key_count(&self) -> usize {
        self.data.len()
    }

    /// Snapshot of the list under `key`, for inspection in tests.
    ///
    /// Returns `None` if the key is absent or not a list.
    pub fn list(&self, key: &[u8]) -> Option<Vec<Value>> {
        match self.data.get(key) {
            Some(Entry::List(items)) => Some(items.clone()),
            _ => None,
        }
    }

    fn owned(key: &[u8]) -> Key {
        Bytes::copy_from_slice(key)
    }
}

/// Resolves a possibly-negative index against a list of length `len`.
///
/// Negative indexes count from the end (-1 is the last element). Returns
/// `None` when the resolved position falls outside `0..len`.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        index.checked_add(len as i64)?
    } else {
        index
    };
    if resolved < 0 || resolved as usize >= len {
        None
    } else {
        Some(resolved as usize)
    }
}

impl StoreBackend for MemoryStore {
    fn key_type(&self, key: &[u8]) -> KeyType {
        match self.data.get(key) {
            Some(Entry::Hash(_)) => KeyType::Hash,
            Some(Entry::List(_)) => KeyType::List,
            None => KeyType::Empty,
        }
    }

    fn hash_get(&self, key: &[u8], field: &[u8]) -> Option<Value> {
        match self.data.get(key) {
            Some(Entry::Hash(fields)) => fields.get(field).cloned(),
            _ => None,
        }
    }

    fn hash_set(&mut self, key: &[u8], field: &[u8], value: Value) -> Result<()> {
        let entry = self
            .data
            .entry(Self::owned(key))
            .or_insert_with(|| Entry::Hash(HashMap::new()));
        match entry {
            Entry::Hash(fields) => {
                fields.insert(Bytes::copy_from_slice(field), value);
                Ok(())
            }
            _ => Err(Error::WrongType),
        }
    }

    fn list_len(&self, key: &[u8]) -> usize {
        match self.data.get(key) {
            Some(Entry::List(items)) => items.len(),
            _ => 0,
        }
    }

    fn list_push(&mut self, key: &[u8], value: Value) -> Result<usize> {
        let entry = self
            .data
            .entry(Self::owned(key))
            .or_insert_with(|| Entry::List(Vec::new()));
        match entry {
            Entry::List(items) => {
                items.push(value);
                Ok(items.len())
            }
            _ => Err(Error::WrongType),
        }
    }

    fn list_set(&mut self, key: &[u8], index: i64, value: Value) -> Result<Value> {
        match self.data.get_mut(key) {
            Some(Entry::List(items)) => {
                let pos = resolve_index(index, items.len()).ok_or(Error::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?;
                Ok(std::mem::replace(&mut items[pos], value))
            }
            Some(_) => Err(Error::WrongType),
            None => Err(Error::IndexOutOfRange { index, len: 0 }),
        }
    }

    fn list_remove_all(&mut self, key: &[u8], value: &[u8]) -> Result<usize> {
        match self.data.get_mut(key) {
            Some(Entry::List(items)) => {
                let before = items.len();
                items.retain(|v| v[..] != *value);
                let removed = before - items.len();
                // An emptied list key is reaped, matching host convention
                if items.is_empty() {
                    self.data.remove(key);
                }
                Ok(removed)
            }
            Some(_) => Err(Error::WrongType),
            None => Ok(0),
        }
    }

    fn delete(&mut self, key: &[u8]) -> bool {
        self.data.remove(key).is_some()
    }
}
