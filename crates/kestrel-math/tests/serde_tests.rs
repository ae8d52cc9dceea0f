// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::unwrap_used)]
#![cfg(feature = "serde")]
use serde_json::json;

use kestrel_math::{Matrix4x4, Transform, Vector2, Vector3, Vector4};

#[rustfmt::skip]
fn counting() -> Matrix4x4 {
    Matrix4x4::new(
         1.0,  2.0,  3.0,  4.0,
         5.0,  6.0,  7.0,  8.0,
         9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    )
}

fn counting_columns_json() -> serde_json::Value {
    json!([
        [1.0, 5.0, 9.0, 13.0],
        [2.0, 6.0, 10.0, 14.0],
        [3.0, 7.0, 11.0, 15.0],
        [4.0, 8.0, 12.0, 16.0]
    ])
}

#[test]
fn vectors_encode_as_plain_arrays() {
    assert_eq!(
        serde_json::to_value(Vector2::new(1.5, -2.0)).unwrap(),
        json!([1.5, -2.0])
    );
    assert_eq!(
        serde_json::to_value(Vector3::new(1.0, 0.5, -4.0)).unwrap(),
        json!([1.0, 0.5, -4.0])
    );
    assert_eq!(
        serde_json::to_value(Vector4::new(1.0, 2.0, 3.0, 0.25)).unwrap(),
        json!([1.0, 2.0, 3.0, 0.25])
    );
}

#[test]
fn vectors_decode_from_plain_arrays() {
    let v2: Vector2 = serde_json::from_str("[3.0, 4.0]").unwrap();
    let v3: Vector3 = serde_json::from_str("[1, 2, 3]").unwrap();
    let v4: Vector4 = serde_json::from_str("[0.5, 0.0, -1.0, 1.0]").unwrap();
    assert_eq!(v2, Vector2::new(3.0, 4.0));
    assert_eq!(v3, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(v4, Vector4::new(0.5, 0.0, -1.0, 1.0));
}

#[test]
fn vectors_reject_the_wrong_arity() {
    assert!(serde_json::from_str::<Vector3>("[1.0, 2.0]").is_err());
    assert!(serde_json::from_str::<Vector2>("[1.0, 2.0, 3.0]").is_err());
    assert!(serde_json::from_str::<Vector4>(r#"{"x": 1.0}"#).is_err());
}

#[test]
fn matrix_encodes_its_columns() {
    let value = serde_json::to_value(counting()).unwrap();
    assert_eq!(value, json!({ "columns": counting_columns_json() }));
    let back: Matrix4x4 = serde_json::from_value(value).unwrap();
    assert_eq!(back, counting());
}

#[test]
fn transform_wraps_its_matrix() {
    let transform = Transform::new(counting());
    let value = serde_json::to_value(transform).unwrap();
    assert_eq!(
        value,
        json!({ "matrix": { "columns": counting_columns_json() } })
    );
    let text = serde_json::to_string(&transform).unwrap();
    let back: Transform = serde_json::from_str(&text).unwrap();
    assert_eq!(back, transform);
}

#[test]
fn composed_transforms_survive_a_text_round_trip() {
    let transform = Transform::translation(Vector3::new(1.0, -2.0, 0.5))
        >> Transform::scale(Vector3::new(2.0, 4.0, 0.25));
    let text = serde_json::to_string(&transform).unwrap();
    let back: Transform = serde_json::from_str(&text).unwrap();
    assert_eq!(back, transform);
    assert_eq!(back.transform(Vector3::zero()), Vector3::new(2.0, -8.0, 0.125));
}
