//! Sentinel value generation for delete-by-index.
//!
//! The delete-by-index trick overwrites the target element with a marker
//! value and then removes every element equal to that marker. Correctness
//! strictly requires that the marker not already appear anywhere in the
//! target list, so the marker is drawn from a 128-bit random space and
//! rendered as a version-4 UUID: 32 lowercase hex digits and 4 hyphens in
//! the 8-4-4-4-12 layout, version nibble fixed to `4`, variant nibble in
//! `{8, 9, a, b}`.
//!
//! A sentinel lives for the duration of one delete-by-index invocation. It
//! is never stored, returned to a client, or reused.

use std::fmt;

use bytes::Bytes;
use rand::RngCore;
use uuid::Builder;

/// Length of the rendered sentinel in bytes.
pub const SENTINEL_LEN: usize = 36;

/// A probabilistically-unique marker value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel(Bytes);

impl Sentinel {
    /// Generates a sentinel from 16 bytes of caller-supplied entropy.
    ///
    /// The version and variant nibbles are stamped over the random bytes,
    /// leaving 122 random bits. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use khepri_commands::sentinel::{Sentinel, SENTINEL_LEN};
    ///
    /// let sentinel = Sentinel::generate(&mut rand::thread_rng());
    /// assert_eq!(sentinel.value().len(), SENTINEL_LEN);
    /// ```
    pub fn generate<R: RngCore>(rng: &mut R) -> Self {
        let mut raw = [0u8; 16];
        rng.fill_bytes(&mut raw);
        let uuid = Builder::from_random_bytes(raw).into_uuid();

        let mut buf = [0u8; SENTINEL_LEN];
        let rendered = uuid.as_hyphenated().encode_lower(&mut buf);
        Sentinel(Bytes::copy_from_slice(rendered.as_bytes()))
    }

    /// Generates a sentinel from the thread-local random source.
    pub fn new() -> Self {
        Self::generate(&mut rand::thread_rng())
    }

    /// The rendered marker value, as compared against list elements.
    pub fn value(&self) -> &Bytes {
        &self.0
    }

    /// Consumes the sentinel, yielding the marker value.
    pub fn into_value(self) -> Bytes {
        self.0
    }
}

impl Default for Sentinel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered form is always ASCII
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
