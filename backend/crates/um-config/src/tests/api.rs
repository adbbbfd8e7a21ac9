use crate::tests::{EnvGuard, setup_config_dir};
use crate::{ApiConfig, Config};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
fn given_no_limit_when_effective_limit_then_default() {
    let api = ApiConfig::default();

    assert_that!(api.effective_limit(None), eq(100));
}

#[test]
fn given_non_positive_or_garbage_limit_when_effective_limit_then_default() {
    let api = ApiConfig::default();

    assert_that!(api.effective_limit(Some("0")), eq(100));
    assert_that!(api.effective_limit(Some("-5")), eq(100));
    assert_that!(api.effective_limit(Some("abc")), eq(100));
    assert_that!(api.effective_limit(Some("")), eq(100));
}

#[test]
fn given_limit_within_bounds_when_effective_limit_then_used() {
    let api = ApiConfig::default();

    assert_that!(api.effective_limit(Some("25")), eq(25));
}

#[test]
fn given_limit_above_max_when_effective_limit_then_capped() {
    let api = ApiConfig {
        default_user_limit: 10,
        max_user_limit: 50,
    };

    assert_that!(api.effective_limit(Some("500")), eq(50));
}

#[test]
#[serial]
fn given_default_above_max_when_validate_then_error() {
    let (_temp, _guard) = setup_config_dir();
    let _default = EnvGuard::set("UM_API_DEFAULT_USER_LIMIT", "200");
    let _max = EnvGuard::set("UM_API_MAX_USER_LIMIT", "150");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_raised_limits_when_validate_then_ok() {
    let (_temp, _guard) = setup_config_dir();
    let _default = EnvGuard::set("UM_API_DEFAULT_USER_LIMIT", "500");
    let _max = EnvGuard::set("UM_API_MAX_USER_LIMIT", "50000");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.api.default_user_limit, eq(500));
}
