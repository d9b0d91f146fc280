use crate::ApiError;
use crate::api::validation::{parse_identity, require_text};

use googletest::prelude::*;

#[test]
fn given_blank_name_when_require_text_then_validation_error_for_field() {
    // Given
    let value = "   ";

    // When
    let result = require_text("name", value, 32);

    // Then
    let Err(ApiError::Validation { field, .. }) = result else {
        panic!("expected validation error");
    };
    assert_that!(field.as_deref(), some(eq("name")));
}

#[test]
fn given_cjk_name_at_limit_when_require_text_then_ok() {
    // Given: four characters, twelve bytes
    let value = "欧阳娜娜";

    // When
    let result = require_text("name", value, 4);

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_name_over_limit_when_require_text_then_error() {
    // Given
    let value = "abcde";

    // When
    let result = require_text("name", value, 4);

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_malformed_identity_when_parse_identity_then_validation_error() {
    // Given
    let raw = "not a token!";

    // When
    let result = parse_identity(raw);

    // Then
    let Err(ApiError::Validation { field, .. }) = result else {
        panic!("expected validation error");
    };
    assert_that!(field.as_deref(), some(eq("identity")));
}
