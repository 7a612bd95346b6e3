//! Tests for configuration loading.

use serial_test::serial;
use std::env;
use std::time::Duration;

use crate::config::Config;

#[test]
fn default_config_matches_documented_values() {
    let config = Config::default();
    assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
    assert_eq!(config.database, "gotodo");
    assert_eq!(config.collection, "todos");
    assert_eq!(config.port, 8080);
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.op_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn config_new_respects_env_vars() {
    unsafe {
        env::set_var("TODO_API_MONGO_URI", "mongodb://db.internal:27017");
        env::set_var("TODO_API_PORT", "9090");
        env::set_var("TODO_API_OP_TIMEOUT_SECS", "2");
    }

    let config = Config::new();
    assert_eq!(config.mongo_uri, "mongodb://db.internal:27017");
    assert_eq!(config.port, 9090);
    assert_eq!(config.op_timeout, Duration::from_secs(2));

    unsafe {
        env::remove_var("TODO_API_MONGO_URI");
        env::remove_var("TODO_API_PORT");
        env::remove_var("TODO_API_OP_TIMEOUT_SECS");
    }
}

#[test]
#[serial]
fn unparsable_env_value_keeps_default() {
    unsafe {
        env::set_var("TODO_API_PORT", "not-a-port");
    }

    let config = Config::new();
    assert_eq!(config.port, 8080);

    unsafe {
        env::remove_var("TODO_API_PORT");
    }
}

#[test]
#[serial]
fn builder_overrides_env_var() {
    unsafe {
        env::set_var("TODO_API_DATABASE", "from-env");
    }

    let config = Config::new().with_database("from-builder");
    assert_eq!(config.database, "from-builder");

    unsafe {
        env::remove_var("TODO_API_DATABASE");
    }
}
