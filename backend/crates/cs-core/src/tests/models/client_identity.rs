use crate::{ClientIdentity, CoreError};

use std::collections::HashSet;
use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_generated_identity_when_inspected_then_is_numeric() {
    let identity = ClientIdentity::generate();

    assert_that!(identity.as_str().is_empty(), eq(false));
    assert!(identity.as_str().chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn given_many_generations_when_compared_then_all_distinct() {
    let tokens: HashSet<ClientIdentity> = (0..1000).map(|_| ClientIdentity::generate()).collect();

    assert_that!(tokens.len(), eq(1000));
}

#[test]
fn given_consecutive_generations_when_time_prefix_compared_then_strictly_increasing() {
    let first = ClientIdentity::generate();
    let second = ClientIdentity::generate();

    // Both carry six random digits after the millisecond prefix
    let prefix = |id: &ClientIdentity| {
        let s = id.as_str();
        s[..s.len() - 6].parse::<i64>().unwrap()
    };

    assert!(prefix(&second) > prefix(&first));
}

#[test]
fn given_surrounding_whitespace_when_parse_then_trimmed() {
    let identity = ClientIdentity::parse("  1700000000000123456\n").unwrap();

    assert_that!(identity.as_str(), eq("1700000000000123456"));
}

#[test]
fn given_legacy_token_when_parse_then_accepted() {
    let result = ClientIdentity::parse("user_lq2x9k_ab12cd34e");

    assert_that!(result, ok(anything()));
}

#[test]
fn given_malformed_tokens_when_parse_then_invalid_identity() {
    for raw in ["", "   ", "12 34", "../etc/passwd", "张三"] {
        let result = ClientIdentity::from_str(raw);

        match result {
            Err(CoreError::InvalidIdentity { .. }) => {}
            other => panic!("Expected InvalidIdentity for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn given_overlong_token_when_parse_then_rejected() {
    let raw = "1".repeat(129);

    assert!(ClientIdentity::parse(&raw).is_err());
}

#[test]
fn given_identity_when_serialized_then_plain_json_string() {
    let identity = ClientIdentity::parse("123456").unwrap();

    let json = serde_json::to_string(&identity).unwrap();

    assert_that!(json.as_str(), eq("\"123456\""));
}

#[test]
fn given_invalid_json_string_when_deserialized_then_error() {
    let result = serde_json::from_str::<ClientIdentity>("\"not a token\"");

    assert!(result.is_err());
}
