//! Atomic read-then-write of one hash field.

use tracing::debug;

use khepri_common::{Error, Result, Value};
use khepri_store::{KeyType, StoreBackend};

/// Atomically reads the current value of `field` under `key`, then writes
/// `value` into it, creating the hash if the key was absent.
///
/// Returns the pre-write value, or `None` if the field had no prior value.
/// The key must be absent or hash-typed.
///
/// No other operation on the same key may interleave between the read and
/// the write; both run inside this one call against the `&mut` store, under
/// the host's per-command execution guarantee.
///
/// # Errors
///
/// - `Error::WrongType` - the key exists and is not a hash
///
/// # Examples
///
/// ```
/// use khepri_commands::hgetset::hgetset;
/// use khepri_store::MemoryStore;
/// use bytes::Bytes;
///
/// let mut store = MemoryStore::new();
/// let prior = hgetset(&mut store, b"h", b"f", Bytes::from("bar")).unwrap();
/// assert_eq!(prior, None);
///
/// let prior = hgetset(&mut store, b"h", b"f", Bytes::from("baz")).unwrap();
/// assert_eq!(prior, Some(Bytes::from("bar")));
/// ```
pub fn hgetset<S: StoreBackend>(
    store: &mut S,
    key: &[u8],
    field: &[u8],
    value: Value,
) -> Result<Option<Value>> {
    match store.key_type(key) {
        KeyType::Hash | KeyType::Empty => {}
        _ => return Err(Error::WrongType),
    }

    let prior = store.hash_get(key, field);
    store.hash_set(key, field, value)?;

    debug!(
        key = %String::from_utf8_lossy(key),
        had_prior = prior.is_some(),
        "hgetset"
    );
    Ok(prior)
}
