// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_2;

use kestrel_math::{Matrix4x4, Transform, Vector2, Vector3};

// Rotations by π/2 leave cos(π/2) ≈ -4.4e-8 behind; compare near zero with an
// absolute tolerance.
fn approx_eq3(a: Vector3, b: Vector3) {
    const ABS_TOL: f32 = 1e-6;
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= ABS_TOL, "index {i}: {a} vs {b}, diff={diff}");
    }
}

#[test]
fn identity_leaves_points_in_place() {
    let p = Vector3::new(1.5, -2.0, 8.0);
    assert_eq!(Transform::identity().transform(p), p);
    assert_eq!(Transform::default(), Transform::identity());
    assert_eq!(*Transform::identity().matrix(), Matrix4x4::identity());
}

#[test]
fn translation_moves_points_but_not_directions() {
    let t = Transform::translation(Vector3::new(5.0, -3.0, 2.0));
    assert_eq!(t.transform(Vector3::new(2.0, 4.0, -1.0)), Vector3::new(7.0, 1.0, 1.0));
    assert_eq!(t.transform_direction(Vector3::UNIT_X), Vector3::UNIT_X);
    assert_eq!(t.matrix().column(3).truncate(), Vector3::new(5.0, -3.0, 2.0));
}

#[test]
fn planar_points_use_z_zero() {
    let t = Transform::translation(Vector3::new(1.0, 2.0, 100.0));
    assert_eq!(t.transform(Vector2::new(3.0, 4.0)), Vector2::new(4.0, 6.0));
}

#[test]
fn scale_uniform_and_per_axis() {
    let p = Vector3::new(1.0, -2.0, 3.0);
    assert_eq!(Transform::uniform_scale(2.0).transform(p), Vector3::new(2.0, -4.0, 6.0));
    assert_eq!(
        Transform::scale(Vector3::new(1.0, 0.5, -1.0)).transform(p),
        Vector3::new(1.0, -1.0, -3.0)
    );
}

#[test]
fn positive_y_rotated_half_pi_around_x_is_positive_z() {
    let rotated = Transform::euler_rotation_x(FRAC_PI_2).transform(Vector3::UNIT_Y);
    approx_eq3(rotated, Vector3::UNIT_Z);
}

#[test]
fn positive_y_rotated_negative_half_pi_around_x_is_negative_z() {
    let rotated = Transform::euler_rotation_x(-FRAC_PI_2).transform(Vector3::UNIT_Y);
    approx_eq3(rotated, -Vector3::UNIT_Z);
}

#[test]
fn rot_y_maps_z_to_x() {
    let rotated = Transform::euler_rotation_y(FRAC_PI_2).transform(Vector3::UNIT_Z);
    approx_eq3(rotated, Vector3::UNIT_X);
}

#[test]
fn rot_z_maps_x_to_y() {
    let rotated = Transform::euler_rotation_z(FRAC_PI_2).transform(Vector3::UNIT_X);
    approx_eq3(rotated, Vector3::UNIT_Y);
}

#[test]
fn rotation_about_an_axis_fixes_that_axis() {
    let angle = 0.7;
    assert_eq!(Transform::euler_rotation_x(angle).transform(Vector3::UNIT_X), Vector3::UNIT_X);
    assert_eq!(Transform::euler_rotation_y(angle).transform(Vector3::UNIT_Y), Vector3::UNIT_Y);
    assert_eq!(Transform::euler_rotation_z(angle).transform(Vector3::UNIT_Z), Vector3::UNIT_Z);
}

#[test]
fn orthographic_maps_box_corners_to_the_unit_cube() {
    let min = Vector3::new(-2.0, 0.0, 1.0);
    let max = Vector3::new(6.0, 4.0, 5.0);
    let ortho = Transform::orthographic(min, max);
    assert_eq!(ortho.transform(min), Vector3::new(-1.0, -1.0, -1.0));
    assert_eq!(ortho.transform(max), Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(ortho.transform(Vector3::new(2.0, 2.0, 3.0)), Vector3::zero());
    assert_eq!(ortho.matrix().row(3), kestrel_math::Vector4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn orthographic_of_a_flat_box_degenerates_to_non_finite() {
    let flat = Transform::orthographic(Vector3::zero(), Vector3::new(1.0, 1.0, 0.0));
    let out = flat.transform(Vector3::new(0.5, 0.5, 0.0));
    assert!(!out.z().is_finite(), "{out}");
}

#[test]
fn then_applies_self_first() {
    let translate = Transform::translation(Vector3::new(1.0, 0.0, 0.0));
    let double = Transform::uniform_scale(2.0);
    let p = Vector3::new(1.0, 1.0, 1.0);

    // translate, then scale: (1+1)*2
    assert_eq!(translate.then(&double).transform(p), Vector3::new(4.0, 2.0, 2.0));
    // scale, then translate: 1*2+1
    assert_eq!(double.then(&translate).transform(p), Vector3::new(3.0, 2.0, 2.0));
    assert_eq!(translate >> double, translate.then(&double));
}

#[test]
fn composed_matrix_is_other_times_self() {
    let a = Transform::translation(Vector3::new(1.0, 2.0, 3.0));
    let b = Transform::scale(Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(*(a >> b).matrix(), *b.matrix() * *a.matrix());
}

#[test]
fn composition_matches_sequential_application() {
    let pipeline = [
        Transform::uniform_scale(3.0),
        Transform::translation(Vector3::new(-1.0, 4.0, 0.5)),
        Transform::scale(Vector3::new(1.0, -1.0, 2.0)),
        Transform::translation(Vector3::new(2.0, 2.0, 2.0)),
    ];
    let composed = pipeline
        .iter()
        .fold(Transform::identity(), |acc, step| acc >> *step);
    let p = Vector3::new(1.0, 2.0, 3.0);
    let sequential = pipeline.iter().fold(p, |point, step| step.transform(point));
    assert_eq!(composed.transform(p), sequential);
}

#[test]
fn from_matrix_matches_new() {
    let m = Matrix4x4::identity() * 2.0;
    assert_eq!(*Transform::from(m).matrix(), m);
    assert_eq!(Transform::new(m), Transform::from(m));
}
