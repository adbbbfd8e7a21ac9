use crate::render::render_empty;
use crate::{render_detail, render_grid, render_table};

use googletest::prelude::*;
use serde_json::json;

use super::user;

#[test]
fn given_user_with_policy_in_payload_when_detail_rendered_then_additional_info_shown() {
    let mut detailed = user(42, "Ann", "USA", None);
    detailed
        .extra
        .insert("fullData".to_string(), json!({"currenciesPoliciesID": 9}));

    let detail = render_detail(&detailed);

    assert_that!(detail, contains_substring("User ID:        42"));
    assert_that!(detail, contains_substring("Join Date:      N/A"));
    assert_that!(detail, contains_substring("Email Verified: No"));
    assert_that!(detail, contains_substring("Currencies Policy ID: 9"));
}

#[test]
fn given_user_without_policy_when_detail_rendered_then_no_additional_info() {
    let detail = render_detail(&user(42, "Ann", "USA", None));

    assert_that!(detail, not(contains_substring("Additional Info")));
    assert_that!(detail, contains_substring("Parent ID:      N/A"));
}

#[test]
fn given_user_without_names_when_rendered_then_fallbacks_used() {
    let mut anonymous = user(5, "x", "", None);
    anonymous.first_name = None;
    anonymous.username = None;

    let table = render_table(std::slice::from_ref(&anonymous));
    let grid = render_grid(std::slice::from_ref(&anonymous));

    assert_that!(table, contains_substring("[U]"));
    assert_that!(table, contains_substring("Unknown"));
    assert_that!(grid, contains_substring("Country: N/A"));
    assert_that!(grid, contains_substring("    N/A\n"));
}

#[test]
fn given_same_users_when_table_and_grid_rendered_then_both_show_each_user() {
    let users = vec![user(1, "Ann", "USA", None), user(2, "bob", "UK", None)];

    let table = render_table(&users);
    let grid = render_grid(&users);

    for layout in [table, grid] {
        assert_that!(layout, contains_substring("[A] Ann Tester"));
        assert_that!(layout, contains_substring("[B] bob Tester"));
        assert_that!(layout, contains_substring("@ann1"));
    }
}

#[test]
fn given_query_when_empty_block_rendered_then_query_is_echoed() {
    assert_that!(
        render_empty(" smith "),
        eq("No users found\nNo users match your search criteria for \"smith\"")
    );
    assert_that!(
        render_empty(""),
        eq("No users found\nNo users match your search criteria")
    );
}
