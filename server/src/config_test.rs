use super::*;

// =============================================================================
// env_bool: unique variable names keep parallel tests apart.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on", "TRUE", " On "].iter().enumerate() {
        let key = format!("__LH_TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__LH_TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_unrecognized_or_unset_is_none() {
    let key = "__LH_TEST_EB_MAYBE__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__LH_TEST_EB_SURELY_UNSET__"), None);
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_accepts_numbers() {
    assert_eq!(parse_port("8080").unwrap(), 8080);
    assert_eq!(parse_port(" 3000 ").unwrap(), 3000);
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port("http"), Err(ConfigError::InvalidPort(_))));
    assert!(matches!(parse_port("70000"), Err(ConfigError::InvalidPort(_))));
}

// =============================================================================
// parse_pool_size
// =============================================================================

#[test]
fn pool_size_parses_positive_counts() {
    assert_eq!(parse_pool_size("10"), Some(10));
    assert_eq!(parse_pool_size(" 1 "), Some(1));
}

#[test]
fn pool_size_ignores_zero_and_garbage() {
    assert_eq!(parse_pool_size("0"), None);
    assert_eq!(parse_pool_size("-3"), None);
    assert_eq!(parse_pool_size("many"), None);
}
