use crate::{LoggingConfig, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_level_when_parsed_then_matches() {
    let level = LogLevel::from_str("DEBUG").unwrap();

    assert_that!(*level, eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_level_when_parsed_then_falls_back_to_info() {
    let level = LogLevel::from_str("chatty").unwrap();

    assert_that!(*level, eq(LevelFilter::Info));
}

#[test]
fn given_toml_logging_section_when_deserialized_then_fields_set() {
    let logging: LoggingConfig =
        toml::from_str("level = \"warn\"\ncolored = false\nfile = \"um.log\"").unwrap();

    assert_that!(*logging.level, eq(LevelFilter::Warn));
    assert_that!(logging.colored, eq(false));
    assert_that!(logging.file.as_deref(), eq(Some("um.log")));
}
