//! Tests for response-envelope normalization
//!
//! # Test Coverage
//!
//! - Primitive results wrapped with a success-based status code
//! - The opt-in success contract: objects without `statusCode` are 500
//! - Handler-set keys surviving normalization and serialization
//! - The wire shape of the envelope (`statusCode` key name, flattening)

use mvc_dispatch::ResponseEnvelope;
use serde_json::json;

use tracing_util::TestTracing;

#[test]
fn test_primitives_wrap_with_success_code() {
    let _tracing = TestTracing::init();
    for value in [json!("pong"), json!(42), json!(true)] {
        let envelope = ResponseEnvelope::normalize(value.clone(), true);
        assert_eq!(envelope, ResponseEnvelope::new(200, value));
    }
}

#[test]
fn test_primitives_wrap_with_failure_code() {
    let _tracing = TestTracing::init();
    for value in [json!("boom"), json!(-1), json!(false)] {
        let envelope = ResponseEnvelope::normalize(value.clone(), false);
        assert_eq!(envelope, ResponseEnvelope::new(500, value));
    }
}

#[test]
fn test_arrays_and_null_wrap_like_primitives() {
    let _tracing = TestTracing::init();
    let envelope = ResponseEnvelope::normalize(json!([1, 2, 3]), true);
    assert_eq!(envelope, ResponseEnvelope::new(200, json!([1, 2, 3])));

    let envelope = ResponseEnvelope::normalize(json!(null), true);
    assert_eq!(envelope, ResponseEnvelope::new(200, json!(null)));
}

#[test]
fn test_object_without_status_code_is_forced_to_500() {
    let _tracing = TestTracing::init();
    // Succeeded, but did not opt in to a success code.
    let envelope = ResponseEnvelope::normalize(json!({"body": {"ok": true}}), true);
    assert_eq!(envelope.status_code, 500);
    assert_eq!(envelope.body, json!({"ok": true}));
}

#[test]
fn test_object_status_code_is_preserved() {
    let _tracing = TestTracing::init();
    let envelope =
        ResponseEnvelope::normalize(json!({"statusCode": 204, "body": null}), true);
    assert_eq!(envelope.status_code, 204);
    assert_eq!(envelope.body, json!(null));
}

#[test]
fn test_failed_object_keeps_its_own_status_code() {
    let _tracing = TestTracing::init();
    let thrown = json!({"statusCode": 403, "body": "forbidden"});
    let envelope = ResponseEnvelope::normalize(thrown, false);
    assert_eq!(envelope, ResponseEnvelope::new(403, json!("forbidden")));
}

#[test]
fn test_non_integer_status_code_counts_as_absent() {
    let _tracing = TestTracing::init();
    let envelope =
        ResponseEnvelope::normalize(json!({"statusCode": "200", "body": "x"}), true);
    assert_eq!(envelope.status_code, 500);
}

#[test]
fn test_extra_keys_survive() {
    let _tracing = TestTracing::init();
    let envelope = ResponseEnvelope::normalize(
        json!({"statusCode": 200, "body": "x", "headers": {"x-trace": "abc"}}),
        true,
    );
    assert_eq!(envelope.extra.get("headers"), Some(&json!({"x-trace": "abc"})));

    let wire = serde_json::to_value(&envelope).expect("serialize");
    assert_eq!(
        wire,
        json!({"statusCode": 200, "body": "x", "headers": {"x-trace": "abc"}})
    );
}

#[test]
fn test_envelope_round_trips_through_the_wire_shape() {
    let _tracing = TestTracing::init();
    let wire = json!({"statusCode": 503, "body": {"retry": true}, "after": 30});
    let envelope: ResponseEnvelope =
        serde_json::from_value(wire.clone()).expect("deserialize");
    assert_eq!(envelope.status_code, 503);
    assert_eq!(envelope.extra.get("after"), Some(&json!(30)));
    assert_eq!(serde_json::to_value(&envelope).expect("serialize"), wire);
}

#[test]
fn test_error_helper_shapes_body() {
    let _tracing = TestTracing::init();
    let envelope = ResponseEnvelope::error(404, "no such pet");
    assert_eq!(envelope.status_code, 404);
    assert_eq!(envelope.body, json!({"error": "no such pet"}));
}
