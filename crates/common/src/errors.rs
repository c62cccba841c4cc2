//! Error types for the Khepri store extension.
//!
//! This module defines the common error type used across all Khepri crates.
//! Each variant corresponds to a distinct client-visible reply, so a caller
//! can programmatically tell apart arity, type, index, store, and invariant
//! failures. Uses `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Common error type for Khepri command execution.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments for a command.
    ///
    /// Raised at parse time, before any store access. Counts include the
    /// command name token.
    #[error("wrong number of arguments for '{command}': expected {expected}, got {got}")]
    WrongArity {
        /// The command that received the wrong arity.
        command: &'static str,
        /// The expected number of tokens (including the command name).
        expected: usize,
        /// The actual number of tokens received.
        got: usize,
    },

    /// The key exists but holds a different container type.
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,

    /// A list index is outside the current bounds of the sequence.
    ///
    /// An absent key has empty bounds, so every index is out of range.
    #[error("index out of range: {index} (len {len})")]
    IndexOutOfRange {
        /// The index as supplied by the caller (may be negative).
        index: i64,
        /// The current length of the list (0 if the key is absent).
        len: usize,
    },

    /// An index operand could not be parsed as an integer.
    #[error("value is not an integer or out of range")]
    InvalidInteger,

    /// No command name was provided.
    #[error("empty command")]
    EmptyCommand,

    /// The command name is not one of the registered extension commands.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command name.
        command: String,
    },

    /// An error surfaced by an underlying store primitive, forwarded verbatim.
    #[error("store error: {0}")]
    Store(String),

    /// An internal assumption was broken.
    ///
    /// The sentinel purge step of delete-by-index removed a number of
    /// elements other than exactly one. Surfaced to the caller rather than
    /// silently misreporting state.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// An embedded self-test case failed.
    #[error("self-test case '{case}' failed: {reason}")]
    SelfTestFailed {
        /// The name of the failing case.
        case: &'static str,
        /// What the case observed.
        reason: String,
    },

    /// Command encode/decode error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Result with Khepri Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_arity_display() {
        let err = Error::WrongArity {
            command: "HGETSET",
            expected: 4,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "wrong number of arguments for 'HGETSET': expected 4, got 2"
        );
    }

    #[test]
    fn test_wrong_type_display_matches_redis_convention() {
        let err = Error::WrongType;
        assert_eq!(
            err.to_string(),
            "WRONGTYPE Operation against a key holding the wrong kind of value"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = Error::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "index out of range: 5 (len 3)");
    }

    #[test]
    fn test_index_out_of_range_negative_index() {
        let err = Error::IndexOutOfRange { index: -4, len: 3 };
        assert_eq!(err.to_string(), "index out of range: -4 (len 3)");
    }

    #[test]
    fn test_invalid_integer_display() {
        let err = Error::InvalidInteger;
        assert_eq!(err.to_string(), "value is not an integer or out of range");
    }

    #[test]
    fn test_empty_command_display() {
        let err = Error::EmptyCommand;
        assert_eq!(err.to_string(), "empty command");
    }

    #[test]
    fn test_unknown_command_display() {
        let err = Error::UnknownCommand {
            command: "HDELSET".to_string(),
        };
        assert_eq!(err.to_string(), "unknown command: HDELSET");
    }

    #[test]
    fn test_store_error_display() {
        let err = Error::Store("backend unavailable".to_string());
        assert_eq!(err.to_string(), "store error: backend unavailable");
    }

    #[test]
    fn test_invariant_violation_display() {
        let err = Error::InvariantViolation("sentinel purge removed 0 elements".to_string());
        assert_eq!(
            err.to_string(),
            "invariant violation: sentinel purge removed 0 elements"
        );
    }

    #[test]
    fn test_self_test_failed_display() {
        let err = Error::SelfTestFailed {
            case: "ldel_removes_by_index",
            reason: "expected test1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "self-test case 'ldel_removes_by_index' failed: expected test1"
        );
    }

    #[test]
    fn test_serialization_error_display() {
        let err = Error::Serialization("failed to decode bincode".to_string());
        assert_eq!(err.to_string(), "serialization error: failed to decode bincode");
    }

    #[test]
    fn test_error_is_debug() {
        let err = Error::WrongType;
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("WrongType"));
    }

    #[test]
    fn test_error_debug_includes_fields() {
        let err = Error::IndexOutOfRange { index: 9, len: 2 };
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("IndexOutOfRange"));
        assert!(debug_str.contains('9'));
        assert!(debug_str.contains('2'));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_alias_ok() {
        let result: Result<i32> = Ok(42);
        assert!(result.is_ok());
    }

    #[test]
    fn test_result_type_alias_err() {
        let result: Result<i32> = Err(Error::WrongType);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_can_be_propagated() {
        fn inner() -> Result<()> {
            Err(Error::EmptyCommand)
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let result = outer();
        assert!(matches!(result.unwrap_err(), Error::EmptyCommand));
    }

    #[test]
    fn test_error_pattern_matching() {
        let err = Error::WrongArity {
            command: "LDEL",
            expected: 3,
            got: 1,
        };

        match err {
            Error::WrongArity {
                command,
                expected,
                got,
            } => {
                assert_eq!(command, "LDEL");
                assert_eq!(expected, 3);
                assert_eq!(got, 1);
            }
            _ => panic!("Expected WrongArity error"),
        }
    }

    #[test]
    fn test_all_error_variants_are_displayable() {
        let errors = vec![
            Error::WrongArity {
                command: "HGETSET",
                expected: 4,
                got: 1,
            },
            Error::WrongType,
            Error::IndexOutOfRange { index: 0, len: 0 },
            Error::InvalidInteger,
            Error::EmptyCommand,
            Error::UnknownCommand {
                command: "NOPE".to_string(),
            },
            Error::Store("test".to_string()),
            Error::InvariantViolation("test".to_string()),
            Error::SelfTestFailed {
                case: "test",
                reason: "test".to_string(),
            },
            Error::Serialization("test".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
