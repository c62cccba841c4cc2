//! Common type aliases used throughout Khepri.
//!
//! Keys, hash fields, and stored values are all opaque byte-strings. Using
//! `bytes::Bytes` keeps clones cheap across the command path, and the
//! aliases give call sites semantic clarity about which byte-string is
//! which.

use bytes::Bytes;

/// An opaque byte-string naming an entry in the host store.
///
/// Supplied by the caller per invocation; never owned or cached by the
/// extension between invocations.
///
/// # Examples
///
/// ```
/// use khepri_common::Key;
/// use bytes::Bytes;
///
/// let key: Key = Bytes::from("mylist");
/// assert_eq!(&key[..], b"mylist");
/// ```
pub type Key = Bytes;

/// A field name inside a hash-typed store entry.
pub type Field = Bytes;

/// A value stored under a key or hash field.
///
/// Values are arbitrary bytes; nothing in the extension assumes UTF-8.
///
/// # Examples
///
/// ```
/// use khepri_common::Value;
/// use bytes::Bytes;
///
/// let value: Value = Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(value.len(), 4);
/// ```
pub type Value = Bytes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_static_bytes() {
        let key: Key = Bytes::from_static(b"counter");
        assert_eq!(&key[..], b"counter");
    }

    #[test]
    fn test_value_allows_binary_data() {
        let value: Value = Bytes::from(vec![0x00, 0xff, 0x7f]);
        assert_eq!(value.len(), 3);
        assert_eq!(value[1], 0xff);
    }

    #[test]
    fn test_clone_is_cheap_and_shares_storage() {
        let field: Field = Bytes::from("name");
        let clone = field.clone();
        // Bytes clones share the underlying buffer
        assert_eq!(field.as_ptr(), clone.as_ptr());
    }

    #[test]
    fn test_empty_byte_strings_are_valid() {
        let key: Key = Bytes::new();
        let value: Value = Bytes::new();
        assert!(key.is_empty());
        assert!(value.is_empty());
    }
}
