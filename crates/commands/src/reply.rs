//! Success replies produced by the extension commands.
//!
//! The host store owns the wire framing; this type is the shape it maps
//! from. Errors travel separately as [`khepri_common::Error`], one distinct
//! kind per client-visible failure.

use khepri_common::Value;

/// A successful command result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A value payload: the prior field value for HGETSET, the removed
    /// element for LDEL.
    Bulk(Value),

    /// No prior value existed. Maps to the host's null reply.
    Null,

    /// A fixed marker string, such as the self-test's `PASS`.
    Simple(&'static str),
}

impl Reply {
    /// Returns true if this is the null reply.
    ///
    /// # Examples
    ///
    /// ```
    /// use khepri_commands::Reply;
    ///
    /// assert!(Reply::Null.is_null());
    /// assert!(!Reply::Simple("PASS").is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        matches!(self, Reply::Null)
    }

    /// Extracts the value payload, if any.
    pub fn as_bulk(&self) -> Option<&Value> {
        match self {
            Reply::Bulk(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_is_null() {
        assert!(Reply::Null.is_null());
        assert!(!Reply::Bulk(Bytes::from("x")).is_null());
        assert!(!Reply::Simple("PASS").is_null());
    }

    #[test]
    fn test_as_bulk_on_bulk() {
        let reply = Reply::Bulk(Bytes::from("value"));
        assert_eq!(reply.as_bulk(), Some(&Bytes::from("value")));
    }

    #[test]
    fn test_as_bulk_on_non_bulk() {
        assert_eq!(Reply::Null.as_bulk(), None);
        assert_eq!(Reply::Simple("PASS").as_bulk(), None);
    }

    #[test]
    fn test_reply_equality() {
        assert_eq!(Reply::Simple("PASS"), Reply::Simple("PASS"));
        assert_ne!(Reply::Null, Reply::Bulk(Bytes::new()));
    }

    #[test]
    fn test_reply_clone() {
        let reply = Reply::Bulk(Bytes::from("payload"));
        assert_eq!(reply.clone(), reply);
    }
}
