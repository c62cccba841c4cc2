//! Host-store surface for the Khepri extension commands.
//!
//! The extension never talks to a concrete store directly: every operation
//! is written against the [`StoreBackend`] trait, which models the small
//! set of primitives the commands consume (type inspection, single-field
//! hash access, index/value-based list mutation). Any store exposing this
//! surface can host the commands.
//!
//! [`MemoryStore`] is the reference implementation backing the embedded
//! self-test harness and the test suites.
//!
//! # Example
//!
//! ```
//! use khepri_store::{KeyType, MemoryStore, StoreBackend};
//! use bytes::Bytes;
//!
//! let mut store = MemoryStore::new();
//! store.list_push(b"queue", Bytes::from("job-1")).unwrap();
//! assert_eq!(store.key_type(b"queue"), KeyType::List);
//! assert_eq!(store.list_len(b"queue"), 1);
//! ```

pub mod backend;
pub mod memory;

// Re-export commonly used types for convenience
pub use backend::{KeyType, StoreBackend};
pub use memory::MemoryStore;
