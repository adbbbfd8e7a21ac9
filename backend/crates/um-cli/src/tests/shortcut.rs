use crate::Shortcut;

use um_view::DateBucket;

use googletest::prelude::*;

#[test]
fn given_single_letter_commands_when_parsed_then_mapped() {
    assert_that!(Shortcut::parse("r"), some(eq(&Shortcut::Refresh)));
    assert_that!(Shortcut::parse("e"), some(eq(&Shortcut::Export)));
    assert_that!(Shortcut::parse(" n "), some(eq(&Shortcut::NextPage)));
    assert_that!(Shortcut::parse("p"), some(eq(&Shortcut::PrevPage)));
    assert_that!(Shortcut::parse("t"), some(eq(&Shortcut::Table)));
    assert_that!(Shortcut::parse("g"), some(eq(&Shortcut::Grid)));
    assert_that!(Shortcut::parse("q"), some(eq(&Shortcut::Quit)));
}

#[test]
fn given_slash_prefix_when_parsed_then_search_text_is_trimmed() {
    assert_that!(
        Shortcut::parse("/ john smith "),
        some(eq(&Shortcut::Search("john smith".to_string())))
    );
    assert_that!(
        Shortcut::parse("/"),
        some(eq(&Shortcut::Search(String::new())))
    );
}

#[test]
fn given_country_command_when_parsed_then_bare_c_clears() {
    assert_that!(
        Shortcut::parse("c United Kingdom"),
        some(eq(&Shortcut::Country(Some("United Kingdom".to_string()))))
    );
    assert_that!(Shortcut::parse("c"), some(eq(&Shortcut::Country(None))));
}

#[test]
fn given_date_command_when_parsed_then_bucket_selected() {
    assert_that!(
        Shortcut::parse("d week"),
        some(eq(&Shortcut::Date(DateBucket::Week)))
    );
    assert_that!(
        Shortcut::parse("d all"),
        some(eq(&Shortcut::Date(DateBucket::All)))
    );
    assert_that!(Shortcut::parse("d"), some(eq(&Shortcut::Date(DateBucket::All))));
}

#[test]
fn given_misspelled_date_bucket_when_parsed_then_rejected() {
    assert_that!(Shortcut::parse("d wek"), none());
    assert_that!(Shortcut::parse("d yesterday"), none());
}

#[test]
fn given_details_command_when_parsed_then_id_must_be_numeric() {
    assert_that!(Shortcut::parse("v 1001"), some(eq(&Shortcut::Details(1001))));
    assert_that!(Shortcut::parse("v abc"), none());
    assert_that!(Shortcut::parse("v"), none());
}

#[test]
fn given_unknown_input_when_parsed_then_none() {
    assert_that!(Shortcut::parse("x"), none());
    assert_that!(Shortcut::parse("r now"), none());
    assert_that!(Shortcut::parse(""), none());
}
