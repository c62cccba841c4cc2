//! The store primitives consumed by the extension commands.
//!
//! This trait is the seam between the commands and whatever store hosts
//! them. Implementations are expected to execute each method as a single
//! logical unit with respect to other operations on the same key; the
//! commands compose two primitive calls inside one `&mut` borrow and rely
//! on the host's per-command execution guarantee for atomicity, taking no
//! locks of their own.

use khepri_common::{Result, Value};

/// The container type held under a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// A hash: field-to-value associations.
    Hash,
    /// A list: ordered, index-addressable, duplicate-permitting values.
    List,
    /// No entry exists under the key.
    Empty,
    /// The key holds some container this extension does not operate on.
    Other,
}

/// The host-store surface the Khepri commands are written against.
///
/// Methods that read treat an absent key as empty rather than as an error;
/// methods that mutate surface [`khepri_common::Error::WrongType`] when the
/// key holds a different container, and
/// [`khepri_common::Error::IndexOutOfRange`] when an index is not
/// addressable (an absent key has empty bounds).
pub trait StoreBackend {
    /// Returns the container type currently held under `key`.
    fn key_type(&self, key: &[u8]) -> KeyType;

    /// Reads one field of a hash-typed entry.
    ///
    /// Returns `None` if the key is absent, holds a different type, or the
    /// field is unset. "No prior value" is a normal result, not a fault.
    fn hash_get(&self, key: &[u8], field: &[u8]) -> Option<Value>;

    /// Writes one field of a hash-typed entry, creating the entry if the
    /// key was absent.
    fn hash_set(&mut self, key: &[u8], field: &[u8], value: Value) -> Result<()>;

    /// Returns the length of the list under `key` (0 if absent).
    fn list_len(&self, key: &[u8]) -> usize;

    /// Appends a value to the tail of the list under `key`, creating the
    /// list if the key was absent. Returns the new length.
    fn list_push(&mut self, key: &[u8], value: Value) -> Result<usize>;

    /// Overwrites the element at `index`, returning its prior value.
    ///
    /// Negative indexes address from the end of the list, mirroring the
    /// host store's indexing convention.
    fn list_set(&mut self, key: &[u8], index: i64, value: Value) -> Result<Value>;

    /// Removes every element equal to `value` from the list under `key`,
    /// returning the number removed. Relative order of the survivors is
    /// preserved.
    fn list_remove_all(&mut self, key: &[u8], value: &[u8]) -> Result<usize>;

    /// Deletes the entry under `key`. Returns whether an entry existed.
    fn delete(&mut self, key: &[u8]) -> bool;
}
