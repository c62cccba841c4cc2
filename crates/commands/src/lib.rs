//! Khepri extension commands for an in-memory key-value store.
//!
//! This crate implements the command layer of the extension:
//!
//! - **HGETSET** - atomic "read old value, write new value" on one field of
//!   a hash-typed key
//! - **LDEL** - delete-by-positional-index on a list-typed key, built from
//!   a sentinel swap-and-remove since the host surface has no native
//!   remove-at-index primitive
//! - **SELFTEST** - the embedded self-test harness, run against the live
//!   store
//!
//! Commands are written against the [`StoreBackend`] trait from
//! `khepri-store`; the host hands each invocation an argument vector and a
//! `&mut` store, and maps the resulting [`Reply`] or
//! [`khepri_common::Error`] onto its own wire framing.
//!
//! # Example
//!
//! ```
//! use khepri_commands::{dispatch, Reply};
//! use khepri_store::{MemoryStore, StoreBackend};
//! use bytes::Bytes;
//!
//! let mut store = MemoryStore::new();
//! for v in ["test1", "test2", "test1"] {
//!     store.list_push(b"mylist", Bytes::from(v)).unwrap();
//! }
//!
//! let args = vec![
//!     Bytes::from("LDEL"),
//!     Bytes::from("mylist"),
//!     Bytes::from("0"),
//! ];
//! let reply = dispatch(&mut store, &args).unwrap();
//! assert_eq!(reply, Reply::Bulk(Bytes::from("test1")));
//! ```

pub mod command;
pub mod hgetset;
pub mod ldel;
pub mod reply;
pub mod selftest;
pub mod sentinel;

use bytes::Bytes;
use khepri_common::Result;
use khepri_store::StoreBackend;

// Re-export commonly used types for convenience
pub use command::Command;
pub use reply::Reply;
pub use sentinel::Sentinel;

/// Parses and executes one command invocation.
///
/// Arity and shape are validated before any store access; execution runs
/// inside the single `&mut` borrow of the store.
pub fn dispatch<S: StoreBackend>(store: &mut S, args: &[Bytes]) -> Result<Reply> {
    Command::from_args(args)?.execute(store)
}
