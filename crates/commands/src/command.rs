//! Command parsing and dispatch.
//!
//! This module converts the argument vector supplied by the host store into
//! strongly-typed command structures, checking arity before any store
//! access, and executes them against a [`StoreBackend`].
//!
//! Commands carry serde derives and bincode helpers so a host that journals
//! executed operations can encode them.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use khepri_common::{Error, Field, Key, Result, Value};
use khepri_store::StoreBackend;

use crate::reply::Reply;
use crate::{hgetset, ldel, selftest};

/// Extension commands supported by Khepri.
///
/// # Supported Commands
///
/// - **HGETSET**: Atomically read the old value of a hash field and write a
///   new one
/// - **LDEL**: Delete one list element by positional index
/// - **SELFTEST**: Run the embedded self-test harness against the live
///   store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// HGETSET key field value
    HGetSet {
        /// The hash key to operate on.
        key: Key,
        /// The field to read and overwrite.
        field: Field,
        /// The new value to write.
        value: Value,
    },

    /// LDEL key index
    LDel {
        /// The list key to operate on.
        key: Key,
        /// Positional index of the element to remove. Negative indexes
        /// address from the end.
        index: i64,
    },

    /// SELFTEST
    SelfTest,
}

impl Command {
    /// Parse a command from the host-supplied argument vector.
    ///
    /// The first token is the command name (matched case-insensitively);
    /// the rest are operands. Arity mismatches are rejected here, before
    /// any store access.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyCommand` - the vector is empty
    /// - `Error::UnknownCommand` - the name is not a registered command
    /// - `Error::WrongArity` - wrong number of tokens for the command
    /// - `Error::InvalidInteger` - the LDEL index is not an integer
    ///
    /// # Examples
    ///
    /// ```
    /// use khepri_commands::Command;
    /// use bytes::Bytes;
    ///
    /// let args = vec![
    ///     Bytes::from("LDEL"),
    ///     Bytes::from("mylist"),
    ///     Bytes::from("0"),
    /// ];
    /// let command = Command::from_args(&args).unwrap();
    /// assert!(matches!(command, Command::LDel { index: 0, .. }));
    /// ```
    pub fn from_args(args: &[Bytes]) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::EmptyCommand);
        }

        let name = match std::str::from_utf8(&args[0]) {
            Ok(s) => s.to_uppercase(),
            Err(_) => {
                return Err(Error::UnknownCommand {
                    command: String::from_utf8_lossy(&args[0]).into_owned(),
                })
            }
        };

        match name.as_str() {
            "HGETSET" => Self::parse_hgetset(args),
            "LDEL" => Self::parse_ldel(args),
            "SELFTEST" => Self::parse_selftest(args),
            _ => Err(Error::UnknownCommand { command: name }),
        }
    }

    /// Parse HGETSET key field value
    fn parse_hgetset(args: &[Bytes]) -> Result<Self> {
        if args.len() != 4 {
            return Err(Error::WrongArity {
                command: "HGETSET",
                expected: 4,
                got: args.len(),
            });
        }

        Ok(Command::HGetSet {
            key: args[1].clone(),
            field: args[2].clone(),
            value: args[3].clone(),
        })
    }

    /// Parse LDEL key index
    fn parse_ldel(args: &[Bytes]) -> Result<Self> {
        if args.len() != 3 {
            return Err(Error::WrongArity {
                command: "LDEL",
                expected: 3,
                got: args.len(),
            });
        }

        let index = std::str::from_utf8(&args[2])
            .map_err(|_| Error::InvalidInteger)?
            .parse::<i64>()
            .map_err(|_| Error::InvalidInteger)?;

        Ok(Command::LDel {
            key: args[1].clone(),
            index,
        })
    }

    /// Parse SELFTEST
    fn parse_selftest(args: &[Bytes]) -> Result<Self> {
        if args.len() != 1 {
            return Err(Error::WrongArity {
                command: "SELFTEST",
                expected: 1,
                got: args.len(),
            });
        }

        Ok(Command::SelfTest)
    }

    /// The command's registered name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::HGetSet { .. } => "HGETSET",
            Command::LDel { .. } => "LDEL",
            Command::SelfTest => "SELFTEST",
        }
    }

    /// Execute this command against a store.
    ///
    /// The whole execution runs inside one `&mut` borrow of the store; the
    /// host's per-command execution guarantee makes the compound
    /// read-then-write sequences atomic with respect to other operations on
    /// the same key.
    pub fn execute<S: StoreBackend>(&self, store: &mut S) -> Result<Reply> {
        match self {
            Command::HGetSet { key, field, value } => {
                match hgetset::hgetset(store, key, field, value.clone())? {
                    Some(prior) => Ok(Reply::Bulk(prior)),
                    None => Ok(Reply::Null),
                }
            }
            Command::LDel { key, index } => {
                let removed = ldel::ldel(store, key, *index)?;
                Ok(Reply::Bulk(removed))
            }
            Command::SelfTest => selftest::run(store),
        }
    }

    /// Serialize this command to bytes.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a command from bytes.
    pub fn deserialize(bytes: &[u8]) -> Result<Command> {
        bincode::deserialize(bytes).map_err(|e| Error::Serialization(e.to_string()))
    }
}
