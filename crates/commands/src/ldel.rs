//! Delete-by-index on a list, via sentinel swap-and-remove.
//!
//! The host surface has no native "remove at index" primitive, so the
//! element at the target index is overwritten with a freshly generated
//! [`Sentinel`] and then removed by value. The overwrite returns the
//! element's prior value, which becomes the command's reply.

use tracing::{debug, warn};

use khepri_common::{Error, Result, Value};
use khepri_store::{KeyType, StoreBackend};

use crate::sentinel::Sentinel;

/// Removes the element at `index` from the list under `key`, returning it.
///
/// Negative indexes address from the end. All other elements keep their
/// relative order; elements after the removed position shift down by one.
///
/// The purge step must remove exactly the one element written in the swap
/// step. Any other count is an invariant violation: zero means the written
/// sentinel vanished, more than one means a sentinel collision removed
/// unrelated elements. Both are surfaced rather than silently ignored.
///
/// # Errors
///
/// - `Error::WrongType` - the key exists and is not a list
/// - `Error::IndexOutOfRange` - `index` is outside the current bounds (an
///   absent key has empty bounds)
/// - `Error::InvariantViolation` - the purge count was not exactly 1
///
/// # Examples
///
/// ```
/// use khepri_commands::ldel::ldel;
/// use khepri_store::{MemoryStore, StoreBackend};
/// use bytes::Bytes;
///
/// let mut store = MemoryStore::new();
/// for v in ["test1", "test2", "test1"] {
///     store.list_push(b"mylist", Bytes::from(v)).unwrap();
/// }
///
/// let removed = ldel(&mut store, b"mylist", 0).unwrap();
/// assert_eq!(removed, Bytes::from("test1"));
/// assert_eq!(store.list_len(b"mylist"), 2);
/// ```
pub fn ldel<S: StoreBackend>(store: &mut S, key: &[u8], index: i64) -> Result<Value> {
    match store.key_type(key) {
        KeyType::List | KeyType::Empty => {}
        _ => return Err(Error::WrongType),
    }

    let sentinel = Sentinel::new();
    let removed = store.list_set(key, index, sentinel.value().clone())?;
    let purged = store.list_remove_all(key, sentinel.value())?;

    if purged != 1 {
        warn!(
            key = %String::from_utf8_lossy(key),
            purged,
            "sentinel purge removed an unexpected number of elements"
        );
        return Err(Error::InvariantViolation(format!(
            "sentinel purge removed {purged} elements, expected exactly 1"
        )));
    }

    debug!(
        key = %String::from_utf8_lossy(key),
        index,
        "ldel"
    );
    Ok(removed)
}
