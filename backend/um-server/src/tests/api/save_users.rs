use crate::api::sync::save_users::batch_from_body;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_wrapped_array_when_extracting_batch_then_returns_items() {
    let batch = batch_from_body(json!({ "data": [{ "userID": 1 }, { "userID": 2 }] })).unwrap();

    assert_that!(batch.len(), eq(2));
}

#[test]
fn given_bare_array_when_extracting_batch_then_returns_items() {
    let batch = batch_from_body(json!([{ "userID": 1 }])).unwrap();

    assert_that!(batch.len(), eq(1));
}

#[test]
fn given_object_without_data_array_when_extracting_batch_then_error() {
    assert_that!(batch_from_body(json!({ "users": [] })), err(anything()));
    assert_that!(batch_from_body(json!({ "data": "nope" })), err(anything()));
}

#[test]
fn given_scalar_body_when_extracting_batch_then_error() {
    assert_that!(batch_from_body(json!(42)), err(anything()));
}
