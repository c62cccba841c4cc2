//! Embedded self-test harness, invoked as the SELFTEST command.
//!
//! The cases exercise the extension commands end-to-end against the live
//! store, going through the same parse-and-dispatch path a client command
//! takes. Fixture keys live under the `khepri:selftest:` namespace and are
//! reset before and after each case, so reruns are deterministic and the
//! store is left as it was found.

use bytes::Bytes;
use tracing::debug;

use khepri_common::{Error, Result};
use khepri_store::StoreBackend;

use crate::command::Command;
use crate::reply::Reply;

const LIST_KEY: &str = "khepri:selftest:list";
const HASH_KEY: &str = "khepri:selftest:hash";

type CaseResult = std::result::Result<(), String>;

/// Runs every embedded case in order.
///
/// Returns `Reply::Simple("PASS")` when all cases hold; the first failing
/// case surfaces as [`Error::SelfTestFailed`].
pub fn run<S: StoreBackend>(store: &mut S) -> Result<Reply> {
    debug!("running embedded self-test");

    run_case(store, "ldel_removes_by_index", ldel_removes_by_index)?;
    run_case(store, "ldel_rejects_out_of_range", ldel_rejects_out_of_range)?;
    run_case(
        store,
        "hgetset_returns_prior_value",
        hgetset_returns_prior_value,
    )?;
    run_case(store, "hgetset_rejects_wrong_type", hgetset_rejects_wrong_type)?;

    Ok(Reply::Simple("PASS"))
}

fn run_case<S: StoreBackend>(
    store: &mut S,
    name: &'static str,
    case: fn(&mut S) -> CaseResult,
) -> Result<()> {
    reset(store);
    let outcome = case(store);
    reset(store);
    outcome.map_err(|reason| Error::SelfTestFailed { case: name, reason })
}

fn reset<S: StoreBackend>(store: &mut S) {
    store.delete(LIST_KEY.as_bytes());
    store.delete(HASH_KEY.as_bytes());
}

/// Dispatches string tokens through the regular command path.
fn call<S: StoreBackend>(store: &mut S, tokens: &[&str]) -> Result<Reply> {
    let args: Vec<Bytes> = tokens.iter().map(|t| Bytes::from(t.to_string())).collect();
    Command::from_args(&args)?.execute(store)
}

fn expect_bulk(reply: &Reply, want: &str) -> CaseResult {
    match reply {
        Reply::Bulk(v) if v[..] == *want.as_bytes() => Ok(()),
        other => Err(format!("expected bulk '{want}', got {other:?}")),
    }
}

fn expect_len<S: StoreBackend>(store: &S, want: usize) -> CaseResult {
    let len = store.list_len(LIST_KEY.as_bytes());
    if len == want {
        Ok(())
    } else {
        Err(format!("expected list length {want}, got {len}"))
    }
}

fn ldel_removes_by_index<S: StoreBackend>(store: &mut S) -> CaseResult {
    for v in ["test1", "test2", "test1"] {
        store
            .list_push(LIST_KEY.as_bytes(), Bytes::from(v))
            .map_err(|e| e.to_string())?;
    }

    // Head deletion: remainder is ["test2", "test1"]
    let reply = call(store, &["LDEL", LIST_KEY, "0"]).map_err(|e| e.to_string())?;
    expect_bulk(&reply, "test1")?;
    expect_len(store, 2)?;

    // Negative index addresses the tail
    let reply = call(store, &["LDEL", LIST_KEY, "-1"]).map_err(|e| e.to_string())?;
    expect_bulk(&reply, "test1")?;
    expect_len(store, 1)?;

    let reply = call(store, &["LDEL", LIST_KEY, "0"]).map_err(|e| e.to_string())?;
    expect_bulk(&reply, "test2")?;
    expect_len(store, 0)
}

fn ldel_rejects_out_of_range<S: StoreBackend>(store: &mut S) -> CaseResult {
    store
        .list_push(LIST_KEY.as_bytes(), Bytes::from("solo"))
        .map_err(|e| e.to_string())?;

    match call(store, &["LDEL", LIST_KEY, "99"]) {
        Err(Error::IndexOutOfRange { .. }) => {}
        other => return Err(format!("expected index error, got {other:?}")),
    }
    expect_len(store, 1)
}

fn hgetset_returns_prior_value<S: StoreBackend>(store: &mut S) -> CaseResult {
    let reply = call(store, &["HGETSET", HASH_KEY, "foo", "baz"]).map_err(|e| e.to_string())?;
    if !reply.is_null() {
        return Err(format!("expected null for absent field, got {reply:?}"));
    }

    let reply = call(store, &["HGETSET", HASH_KEY, "foo", "bag"]).map_err(|e| e.to_string())?;
    expect_bulk(&reply, "baz")?;

    let reply = call(store, &["HGETSET", HASH_KEY, "foo", "bang"]).map_err(|e| e.to_string())?;
    expect_bulk(&reply, "bag")
}

fn hgetset_rejects_wrong_type<S: StoreBackend>(store: &mut S) -> CaseResult {
    store
        .list_push(LIST_KEY.as_bytes(), Bytes::from("x"))
        .map_err(|e| e.to_string())?;
    store
        .hash_set(HASH_KEY.as_bytes(), b"f", Bytes::from("v"))
        .map_err(|e| e.to_string())?;

    match call(store, &["HGETSET", LIST_KEY, "f", "v"]) {
        Err(Error::WrongType) => {}
        other => return Err(format!("expected wrong-type for hgetset, got {other:?}")),
    }

    match call(store, &["LDEL", HASH_KEY, "0"]) {
        Err(Error::WrongType) => Ok(()),
        other => Err(format!("expected wrong-type for ldel, got {other:?}")),
    }
}
