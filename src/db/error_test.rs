//! Tests for storage error types.

use crate::db::{StoreError, StoreResult};

#[test]
fn connection_error_displays_correctly() {
    let err = StoreError::Connection {
        message: "connection refused".to_string(),
    };
    assert_eq!(err.to_string(), "Connection error: connection refused");
}

#[test]
fn ping_error_displays_correctly() {
    let err = StoreError::Ping {
        message: "server selection timed out".to_string(),
    };
    assert_eq!(err.to_string(), "Ping error: server selection timed out");
}

#[test]
fn query_error_displays_correctly() {
    let err = StoreError::Query {
        message: "cursor exhausted".to_string(),
    };
    assert_eq!(err.to_string(), "Query error: cursor exhausted");
}

#[test]
fn malformed_id_error_names_the_actual_type() {
    let err = StoreError::MalformedId {
        actual: "String(\"oops\")".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Unexpected inserted id type: String(\"oops\")"
    );
}

#[test]
fn timeout_error_displays_the_bound() {
    let err = StoreError::Timeout { seconds: 5 };
    assert_eq!(err.to_string(), "Operation timed out after 5s");
}

#[test]
fn store_result_err_returns_error() {
    let result: StoreResult<()> = Err(StoreError::Insert {
        message: "write concern failed".to_string(),
    });
    assert!(result.is_err());
}
