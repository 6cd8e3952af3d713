use crate::logging::env_filter;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_filter_defaults_to_warn() {
    env::remove_var("RUST_LOG");
    assert_eq!(env_filter().to_string(), "warn");
}

#[test]
#[serial]
fn test_filter_reads_rust_log() {
    env::set_var("RUST_LOG", "debug");
    let filter = env_filter().to_string();
    env::remove_var("RUST_LOG");

    assert_eq!(filter, "debug");
}
